/// Errors only arise at the edges: config, dataset, drawing surface.
/// Viewport math itself clamps instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    ConfigError(String),
    DatasetError(String),
    SurfaceError(String),
    RenderingError(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::ConfigError(msg) => write!(f, "Config Error: {}", msg),
            AppError::DatasetError(msg) => write!(f, "Dataset Error: {}", msg),
            AppError::SurfaceError(msg) => write!(f, "Surface Error: {}", msg),
            AppError::RenderingError(msg) => write!(f, "Rendering Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

pub type ConfigResult<T> = Result<T, AppError>;
pub type DatasetResult<T> = Result<T, AppError>;
pub type RenderingResult<T> = Result<T, AppError>;

impl From<AppError> for wasm_bindgen::JsValue {
    fn from(err: AppError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
