use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum SheetError {
    Workbook(String),
    SheetNotFound {
        sheet: String,
        available: Vec<String>,
    },
    EmptySheet,
    MissingColumn(String),
}

impl fmt::Display for SheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetError::Workbook(msg) => write!(f, "Unable to process the spreadsheet: {}", msg),
            SheetError::SheetNotFound { sheet, available } => write!(
                f,
                "Sheet '{}' not found (available: {})",
                sheet,
                available.join(", ")
            ),
            SheetError::EmptySheet => write!(f, "Sheet has no header row"),
            SheetError::MissingColumn(label) => {
                write!(f, "Header row has no column labelled {:?}", label)
            }
        }
    }
}

impl std::error::Error for SheetError {}

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, io::Error),
    Parse(PathBuf, toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "Cannot read {}: {}", path.display(), e),
            ConfigError::Parse(path, e) => write!(f, "Invalid config {}: {}", path.display(), e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(_, e) => Some(e),
            ConfigError::Parse(_, e) => Some(e),
        }
    }
}

#[derive(Debug)]
pub enum GenerateError {
    InputNotFound(PathBuf),
    Sheet(SheetError),
    Config(ConfigError),
    Io(io::Error),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::InputNotFound(path) => {
                write!(f, "Unable to locate the file \"{}\".", path.display())
            }
            GenerateError::Sheet(e) => write!(f, "{}", e),
            GenerateError::Config(e) => write!(f, "{}", e),
            GenerateError::Io(e) => write!(f, "Failed to write output: {}", e),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::InputNotFound(_) => None,
            GenerateError::Sheet(e) => Some(e),
            GenerateError::Config(e) => Some(e),
            GenerateError::Io(e) => Some(e),
        }
    }
}

impl From<SheetError> for GenerateError {
    fn from(e: SheetError) -> Self {
        GenerateError::Sheet(e)
    }
}

impl From<ConfigError> for GenerateError {
    fn from(e: ConfigError) -> Self {
        GenerateError::Config(e)
    }
}

impl From<io::Error> for GenerateError {
    fn from(e: io::Error) -> Self {
        GenerateError::Io(e)
    }
}
