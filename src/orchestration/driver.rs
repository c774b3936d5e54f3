// Wed Oct 14 2026 - Alex

use crate::config::GeneratorConfig;
use crate::emit::{layout, manifest, statics, version, wrapper, EmitContext};
use crate::error::{GenError, Result};
use crate::model::{ClassDecl, ObjectModel};
use crate::output::OutputManager;
use crate::schema::ClassificationSchema;
use crate::structure::{VTableBuilder, VTableLayout};
use crate::types::{TypeMapper, TypeTables};
use crate::utils::logging::ScopedTimer;
use crate::version::VersionConstants;
use indexmap::IndexSet;
use std::path::{Path, PathBuf};

pub const VERSION_HEADER: &str = "cef_version.h";
pub const API_VERSIONS_HEADER: &str = "cef_api_versions.h";

/// Raw text of the native version headers.
#[derive(Debug, Clone)]
pub struct VersionHeaders {
    pub version_h: String,
    pub api_versions_h: String,
}

impl VersionHeaders {
    pub fn new(version_h: &str, api_versions_h: &str) -> Self {
        Self {
            version_h: version_h.to_string(),
            api_versions_h: api_versions_h.to_string(),
        }
    }

    pub fn load(include_dir: &Path) -> Result<Self> {
        Ok(Self {
            version_h: std::fs::read_to_string(include_dir.join(VERSION_HEADER))?,
            api_versions_h: std::fs::read_to_string(include_dir.join(API_VERSIONS_HEADER))?,
        })
    }
}

/// One generated file before it is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub dir: PathBuf,
    pub filename: String,
    pub content: String,
}

impl GeneratedArtifact {
    pub fn new(dir: &Path, filename: String, content: String) -> Self {
        Self {
            dir: dir.to_path_buf(),
            filename,
            content,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub classes: usize,
    pub proxies: usize,
    pub handlers: usize,
    pub slots: usize,
    pub functions: usize,
    /// Native spellings no dictionary knows; they pass through unchanged.
    pub unmapped_types: Vec<String>,
}

impl ValidationReport {
    pub fn display(&self) -> String {
        format!(
            "Classes: {} (proxies {}, handlers {}), Slots: {}, Functions: {}, Unmapped types: {}",
            self.classes,
            self.proxies,
            self.handlers,
            self.slots,
            self.functions,
            self.unmapped_types.len()
        )
    }
}

type ProgressFn = Box<dyn Fn(&str)>;

pub struct Driver {
    config: GeneratorConfig,
    schema: ClassificationSchema,
    tables: TypeTables,
    headers: Option<VersionHeaders>,
    progress: Option<ProgressFn>,
}

impl Driver {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            schema: ClassificationSchema::builtin(),
            tables: TypeTables::builtin(),
            headers: None,
            progress: None,
        }
    }

    /// Built-in schema and type tables, extended by the files the config
    /// names.
    pub fn from_config(config: GeneratorConfig) -> Result<Self> {
        let mut schema = ClassificationSchema::builtin();
        if let Some(path) = &config.schema_file {
            log::debug!("loading classification schema from {}", path.display());
            schema.merge(ClassificationSchema::load(path)?);
        }

        let mut tables = TypeTables::builtin();
        if let Some(path) = &config.type_tables_file {
            log::debug!("loading type tables from {}", path.display());
            tables.merge(TypeTables::load(path)?);
        }

        Ok(Self::new(config).with_schema(schema).with_type_tables(tables))
    }

    pub fn with_schema(mut self, schema: ClassificationSchema) -> Self {
        self.schema = schema;
        self
    }

    pub fn with_type_tables(mut self, tables: TypeTables) -> Self {
        self.tables = tables;
        self
    }

    pub fn with_version_headers(mut self, headers: VersionHeaders) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn with_progress<F: Fn(&str) + 'static>(mut self, progress: F) -> Self {
        self.progress = Some(Box::new(progress));
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn schema(&self) -> &ClassificationSchema {
        &self.schema
    }

    /// The parsed model plus the configured synthetic classes.
    pub fn complete_model(&self, model: &ObjectModel) -> ObjectModel {
        let mut complete = model.clone();
        for synthetic in &self.config.synthetic_classes {
            if complete.class_by_name(&synthetic.name).is_none() {
                complete = complete.with_class(synthetic.to_class());
            }
        }
        complete
    }

    pub fn mapper_for(&self, model: &ObjectModel) -> TypeMapper {
        let mut mapper = TypeMapper::new(self.tables.clone());
        mapper.register_classes(model.classes());
        mapper
    }

    /// Every class must carry exactly one role before anything is generated.
    pub fn validate_roles(&self, model: &ObjectModel) -> Result<()> {
        for cls in model.sorted_classes() {
            let role = self.schema.role(&cls.name);
            if role.is_empty() {
                log::error!("Class role must be defined. Class name {}.", cls.name);
                return Err(GenError::MissingRole(cls.name.clone()));
            }
            // both parts would declare _self and ToNative
            if role.is_proxy() && role.is_handler() {
                log::error!("Class {} cannot be both PROXY and HANDLER.", cls.name);
                return Err(GenError::ConflictingRoles(cls.name.clone()));
            }
        }
        Ok(())
    }

    pub fn layouts<'m>(&self, model: &'m ObjectModel, mapper: &TypeMapper) -> Result<Vec<(&'m ClassDecl, VTableLayout)>> {
        let _timer = ScopedTimer::new("layout computation");
        let ctx = EmitContext::new(&self.config, &self.schema, mapper);
        let builder = VTableBuilder::new(model, ctx.normalizer());

        model
            .sorted_classes()
            .into_iter()
            .map(|cls| builder.build(cls).map(|layout| (cls, layout)))
            .collect()
    }

    pub fn validate(&self, model: &ObjectModel) -> Result<ValidationReport> {
        let model = self.complete_model(model);
        let mapper = self.mapper_for(&model);
        self.validate_roles(&model)?;
        let layouts = self.layouts(&model, &mapper)?;

        let mut unmapped = IndexSet::new();
        let all_functions = model
            .classes()
            .iter()
            .flat_map(|c| c.virtual_functions.iter().chain(c.static_functions.iter()))
            .chain(model.functions().iter());
        for func in all_functions {
            let types = std::iter::once(&func.return_type).chain(func.arguments.iter().map(|a| &a.ty));
            for ty in types {
                if ty != "void" && !mapper.is_mapped(ty) {
                    unmapped.insert(ty.clone());
                }
            }
        }

        Ok(ValidationReport {
            classes: layouts.len(),
            proxies: layouts.iter().filter(|(c, _)| self.schema.is_proxy(&c.name)).count(),
            handlers: layouts.iter().filter(|(c, _)| self.schema.is_handler(&c.name)).count(),
            slots: layouts.iter().map(|(_, l)| l.len()).sum(),
            functions: model.functions().len(),
            unmapped_types: unmapped.into_iter().collect(),
        })
    }

    /// Every artifact except the manifest, in write order. All fatal checks
    /// happen here, before anything is written.
    pub fn plan(&self, model: &ObjectModel) -> Result<Vec<GeneratedArtifact>> {
        let model = self.complete_model(model);
        let mapper = self.mapper_for(&model);
        log::debug!("registered {} struct types", mapper.struct_count());

        self.validate_roles(&model)?;
        let layouts = self.layouts(&model, &mapper)?;

        let constants = match &self.headers {
            Some(headers) => Some(VersionConstants::extract(&headers.version_h, &headers.api_versions_h)?),
            None => None,
        };

        let ctx = EmitContext::new(&self.config, &self.schema, &mapper);
        let config = &self.config;
        let mut artifacts = Vec::new();

        for (cls, layout) in &layouts {
            artifacts.push(GeneratedArtifact::new(
                &config.struct_path,
                format!("{}.g.cs", cls.abi_name),
                layout::struct_file(&ctx, cls, layout),
            ));
        }

        artifacts.push(GeneratedArtifact::new(
            &config.static_table_path,
            config.static_table_filename.clone(),
            statics::static_table_file(&ctx, model.functions()),
        ));

        for (cls, layout) in &layouts {
            artifacts.push(GeneratedArtifact::new(
                &config.wrapper_path,
                format!("{}.g.cs", ctx.wrapper_name(cls)),
                wrapper::wrapper_file(&ctx, cls, layout),
            ));
        }

        if let Some(constants) = &constants {
            artifacts.push(GeneratedArtifact::new(
                &config.static_table_path,
                config.version_filename.clone(),
                version::version_file(&ctx, constants)?,
            ));
        }

        Ok(artifacts)
    }

    /// Regenerates everything through `output`. Returns the number of files
    /// actually modified, 0 when everything was up to date.
    pub fn run(&self, model: &ObjectModel, output: &mut OutputManager) -> Result<usize> {
        let _timer = ScopedTimer::new("regeneration");
        let artifacts = self.plan(model)?;
        let mut written = 0;

        for artifact in &artifacts {
            self.report(&artifact.filename);
            if output.update_file(&artifact.dir, &artifact.filename, &artifact.content, true)? {
                written += 1;
            }
        }

        self.report(&self.config.manifest_filename);
        let props = manifest::manifest_file(&output.tracked_paths());
        if output.update_file(Path::new(""), &self.config.manifest_filename, &props, false)? {
            written += 1;
        }

        log::info!("{} of {} file(s) updated", written, artifacts.len() + 1);
        Ok(written)
    }

    fn report(&self, filename: &str) {
        if let Some(progress) = &self.progress {
            progress(filename);
        }
    }
}

/// Regenerates `model` into `output_root` with the built-in configuration.
pub fn regenerate(model: &ObjectModel, output_root: &Path, make_backup: bool) -> Result<usize> {
    let config = GeneratorConfig::default().with_backup(make_backup);
    let mut output = OutputManager::on_disk(output_root.to_path_buf()).with_backup(make_backup);
    Driver::new(config).run(model, &mut output)
}
