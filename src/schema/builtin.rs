// Mon Oct 12 2026 - Alex

use crate::schema::role::ClassRole;

/// (class name, role, rename, reversible, autodispose)
pub type ClassRow = (&'static str, ClassRole, Option<&'static str>, bool, bool);

pub const BUILTIN_CLASSES: &[ClassRow] = &[
    ("CefUserData", ClassRole::HANDLER, None, true, false),
    ("CefApp", ClassRole::HANDLER, Some("CefApp"), false, false),
    ("CefBrowser", ClassRole::PROXY, None, false, false),
    ("CefBrowserHost", ClassRole::PROXY, None, false, false),
    ("CefCallback", ClassRole::PROXY, None, false, false),
    ("CefClient", ClassRole::HANDLER, None, true, false),
    ("CefDisplayHandler", ClassRole::HANDLER, None, false, false),
    ("CefFrame", ClassRole::PROXY, None, false, false),
    ("CefGeolocationCallback", ClassRole::PROXY, None, false, false),
    ("CefGeolocationHandler", ClassRole::HANDLER, None, false, false),
    ("CefLifeSpanHandler", ClassRole::HANDLER, None, false, false),
    ("CefLoadHandler", ClassRole::HANDLER, None, false, false),
    ("CefProcessMessage", ClassRole::PROXY, None, false, false),
    ("CefProxyHandler", ClassRole::HANDLER, None, false, false),
    ("CefRenderProcessHandler", ClassRole::HANDLER, None, false, false),
    ("CefRequest", ClassRole::PROXY, None, false, false),
    ("CefPostData", ClassRole::PROXY, None, false, false),
    ("CefPostDataElement", ClassRole::PROXY, None, false, false),
    ("CefAuthCallback", ClassRole::PROXY, None, false, false),
    ("CefRequestHandler", ClassRole::HANDLER, None, false, false),
    ("CefResourceBundleHandler", ClassRole::HANDLER, None, false, false),
    ("CefResourceHandler", ClassRole::HANDLER, None, false, true),
    ("CefResponse", ClassRole::PROXY, None, false, false),
    ("CefSchemeHandlerFactory", ClassRole::HANDLER, None, false, false),
    ("CefReadHandler", ClassRole::HANDLER, None, false, false),
    ("CefStreamReader", ClassRole::PROXY, None, false, false),
    ("CefWriteHandler", ClassRole::HANDLER, None, false, false),
    ("CefStreamWriter", ClassRole::PROXY, None, false, false),
    ("CefStringVisitor", ClassRole::HANDLER, None, false, true),
    ("CefTask", ClassRole::HANDLER, None, false, false),
    ("CefV8Context", ClassRole::PROXY, None, false, false),
    ("CefV8Handler", ClassRole::HANDLER, None, true, false),
    ("CefV8Accessor", ClassRole::HANDLER, None, false, false),
    ("CefV8Exception", ClassRole::PROXY, None, false, false),
    ("CefV8Value", ClassRole::PROXY, None, false, false),
    ("CefV8StackTrace", ClassRole::PROXY, None, false, false),
    ("CefV8StackFrame", ClassRole::PROXY, None, false, false),
    ("CefBinaryValue", ClassRole::PROXY, None, false, false),
    ("CefDictionaryValue", ClassRole::PROXY, None, false, false),
    ("CefListValue", ClassRole::PROXY, None, false, false),
    ("CefXmlReader", ClassRole::PROXY, None, false, false),
    ("CefZipReader", ClassRole::PROXY, None, false, false),
    ("CefContextMenuHandler", ClassRole::HANDLER, None, false, false),
    ("CefContextMenuParams", ClassRole::PROXY, None, false, false),
    ("CefCommandLine", ClassRole::PROXY, None, false, false),
    ("CefCookieManager", ClassRole::PROXY, None, false, false),
    ("CefCookieVisitor", ClassRole::HANDLER, None, false, true),
    ("CefDOMVisitor", ClassRole::HANDLER, Some("CefDomVisitor"), false, false),
    ("CefDOMDocument", ClassRole::PROXY, Some("CefDomDocument"), false, false),
    ("CefDOMNode", ClassRole::PROXY, Some("CefDomNode"), false, false),
    ("CefDOMEvent", ClassRole::PROXY, Some("CefDomEvent"), false, false),
    ("CefDOMEventListener", ClassRole::HANDLER, Some("CefDomEventListener"), false, false),
    ("CefJSDialogCallback", ClassRole::PROXY, None, false, false),
    ("CefJSDialogHandler", ClassRole::HANDLER, None, false, false),
    ("CefMenuModel", ClassRole::PROXY, None, false, false),
    ("CefSchemeRegistrar", ClassRole::PROXY, None, false, false),
    ("CefWebPluginInfo", ClassRole::PROXY, None, false, false),
    ("CefWebPluginInfoVisitor", ClassRole::HANDLER, None, false, true),
    ("CefFocusHandler", ClassRole::HANDLER, None, false, false),
    ("CefKeyboardHandler", ClassRole::HANDLER, None, false, false),
    ("CefBrowserProcessHandler", ClassRole::HANDLER, None, false, false),
    ("CefURLRequest", ClassRole::PROXY, Some("CefUrlRequest"), false, false),
    ("CefURLRequestClient", ClassRole::HANDLER, Some("CefUrlRequestClient"), true, false),
    ("CefBeforeDownloadCallback", ClassRole::PROXY, None, false, false),
    ("CefDownloadItemCallback", ClassRole::PROXY, None, false, false),
    ("CefDownloadHandler", ClassRole::HANDLER, None, false, false),
    ("CefDownloadItem", ClassRole::PROXY, None, false, false),
    ("CefQuotaCallback", ClassRole::PROXY, None, false, false),
    ("CefWebPluginUnstableCallback", ClassRole::HANDLER, None, false, false),
    ("CefRunFileDialogCallback", ClassRole::HANDLER, None, false, false),
    ("CefFileDialogCallback", ClassRole::PROXY, None, false, false),
    ("CefDialogHandler", ClassRole::HANDLER, None, false, false),
    ("CefGetGeolocationCallback", ClassRole::HANDLER, None, false, false),
    ("CefTraceClient", ClassRole::HANDLER, None, false, false),
    ("CefRenderHandler", ClassRole::HANDLER, None, false, false),
    ("CefTaskRunner", ClassRole::PROXY, None, false, false),
    ("CefCompletionHandler", ClassRole::HANDLER, None, false, false),
    ("CefAllowCertificateErrorCallback", ClassRole::PROXY, None, false, false),
    ("CefDragData", ClassRole::PROXY, None, false, false),
    ("CefDragHandler", ClassRole::HANDLER, None, false, false),
    ("CefRequestContext", ClassRole::PROXY, None, false, false),
    ("CefRequestContextHandler", ClassRole::HANDLER, None, true, false),
    ("CefEndTracingCallback", ClassRole::HANDLER, None, false, false),
    ("CefCompletionCallback", ClassRole::HANDLER, None, false, false),
    ("CefPrintDialogCallback", ClassRole::PROXY, None, false, false),
    ("CefPrintJobCallback", ClassRole::PROXY, None, false, false),
    ("CefPrintHandler", ClassRole::HANDLER, None, false, false),
    ("CefPrintSettings", ClassRole::PROXY, None, false, false),
    ("CefNavigationEntryVisitor", ClassRole::HANDLER, None, false, true),
    ("CefNavigationEntry", ClassRole::PROXY, None, false, false),
    ("CefFindHandler", ClassRole::HANDLER, None, false, false),
    ("CefSSLCertPrincipal", ClassRole::PROXY, Some("CefSslCertPrincipal"), false, false),
    ("CefSSLInfo", ClassRole::PROXY, Some("CefSslInfo"), false, false),
    ("CefSetCookieCallback", ClassRole::HANDLER, None, false, true),
    ("CefDeleteCookiesCallback", ClassRole::HANDLER, None, false, true),
    ("CefRequestCallback", ClassRole::PROXY, None, false, false),
    ("CefValue", ClassRole::PROXY, None, false, false),
    ("CefPdfPrintCallback", ClassRole::HANDLER, None, false, false),
    ("CefRunContextMenuCallback", ClassRole::PROXY, None, false, false),
    ("CefResourceBundle", ClassRole::PROXY, None, false, false),
    ("CefResponseFilter", ClassRole::HANDLER, None, false, true),
    ("CefResolveCallback", ClassRole::HANDLER, None, false, false),
    ("CefDownloadImageCallback", ClassRole::HANDLER, None, false, false),
    ("CefImage", ClassRole::PROXY, None, false, false),
    ("CefMenuModelDelegate", ClassRole::HANDLER, None, false, false),
    ("CefRegisterCdmCallback", ClassRole::HANDLER, None, false, false),
    ("CefSelectClientCertificateCallback", ClassRole::PROXY, None, false, false),
    ("CefSSLStatus", ClassRole::PROXY, Some("CefSslStatus"), false, false),
    ("CefV8Interceptor", ClassRole::HANDLER, None, false, false),
    ("CefX509CertPrincipal", ClassRole::PROXY, None, false, false),
    ("CefX509Certificate", ClassRole::PROXY, None, false, false),
    ("CefThread", ClassRole::PROXY, None, false, false),
    ("CefWaitableEvent", ClassRole::PROXY, None, false, false),
    ("CefAccessibilityHandler", ClassRole::HANDLER, None, false, false),
    ("CefExtension", ClassRole::PROXY, None, false, false),
    ("CefExtensionHandler", ClassRole::HANDLER, None, true, false),
    ("CefGetExtensionResourceCallback", ClassRole::PROXY, None, false, false),
    ("CefServer", ClassRole::PROXY, None, false, false),
    ("CefServerHandler", ClassRole::HANDLER, None, false, false),
    ("CefV8ArrayBufferReleaseCallback", ClassRole::HANDLER, None, true, false),
    ("CefAudioHandler", ClassRole::HANDLER, None, false, false),
    ("CefResourceSkipCallback", ClassRole::PROXY, None, false, false),
    ("CefResourceReadCallback", ClassRole::PROXY, None, false, false),
    ("CefResourceRequestHandler", ClassRole::HANDLER, None, false, false),
    ("CefCookieAccessFilter", ClassRole::HANDLER, None, false, false),
    ("CefRegistration", ClassRole::PROXY, None, false, false),
    ("CefMediaRouter", ClassRole::PROXY, None, false, false),
    ("CefMediaObserver", ClassRole::HANDLER, None, false, false),
    ("CefMediaRoute", ClassRole::PROXY, None, false, false),
    ("CefMediaRouteCreateCallback", ClassRole::HANDLER, None, false, false),
    ("CefMediaSink", ClassRole::PROXY, None, false, false),
    ("CefMediaSource", ClassRole::PROXY, None, false, false),
    ("CefDevToolsMessageObserver", ClassRole::HANDLER, None, false, false),
    ("CefMediaSinkDeviceInfoCallback", ClassRole::HANDLER, None, false, true),
    ("CefFrameHandler", ClassRole::HANDLER, None, false, false),
    ("CefCommandHandler", ClassRole::HANDLER, None, false, false),
];
