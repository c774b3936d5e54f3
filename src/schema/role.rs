// Mon Oct 12 2026 - Alex

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

bitflags! {
    /// Generation roles of a class. A class may hold both.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct ClassRole: u8 {
        /// ReceivesCalls: managed code implements the vtable, native code calls it.
        const HANDLER = 1;
        /// ProducesCalls: managed code calls into native vtable slots.
        const PROXY = 2;
    }
}

impl ClassRole {
    pub fn is_handler(&self) -> bool {
        self.contains(ClassRole::HANDLER)
    }

    pub fn is_proxy(&self) -> bool {
        self.contains(ClassRole::PROXY)
    }
}

impl fmt::Display for ClassRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.is_proxy() {
            parts.push("PROXY");
        }
        if self.is_handler() {
            parts.push("HANDLER");
        }
        if parts.is_empty() {
            write!(f, "NONE")
        } else {
            write!(f, "{}", parts.join("+"))
        }
    }
}
