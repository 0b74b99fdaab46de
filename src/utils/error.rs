use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoothError {
    #[error("Geolocation is not available on this device")]
    GeolocationUnavailable,

    #[error("Geolocation permission denied")]
    GeolocationPermissionDenied,

    #[error("Geolocation failed: {detail}")]
    GeolocationError { detail: String },

    #[error("Unknown package id: {id}")]
    UnknownPackage { id: u32 },

    #[error("Coordinate out of range: {field} = {value}")]
    InvalidCoordinateRange { field: String, value: f64 },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error in '{field}': {message}")]
    ValidationError { field: String, message: String },

    #[error("Dispatch via {channel} failed: {message}")]
    DispatchError { channel: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Location,
    Catalog,
    Input,
    Configuration,
    Dispatch,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BoothError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BoothError::GeolocationUnavailable
            | BoothError::GeolocationPermissionDenied
            | BoothError::GeolocationError { .. } => ErrorCategory::Location,
            BoothError::UnknownPackage { .. } => ErrorCategory::Catalog,
            BoothError::InvalidCoordinateRange { .. } | BoothError::ValidationError { .. } => {
                ErrorCategory::Input
            }
            BoothError::ConfigError { .. } | BoothError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            BoothError::DispatchError { .. } | BoothError::HttpError(_) => ErrorCategory::Dispatch,
            BoothError::IoError(_) | BoothError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // The visitor can still send a reservation without a position.
            ErrorCategory::Location => ErrorSeverity::Low,
            ErrorCategory::Dispatch => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Catalog | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BoothError::GeolocationUnavailable => {
                "Géolocalisation non disponible sur cet appareil.".to_string()
            }
            BoothError::GeolocationPermissionDenied => {
                "Impossible d'obtenir votre position : autorisation refusée.".to_string()
            }
            BoothError::GeolocationError { .. } => {
                "Impossible d'obtenir votre position : une erreur est survenue.".to_string()
            }
            BoothError::UnknownPackage { .. } => {
                "Une erreur est survenue lors de la préparation de votre demande.".to_string()
            }
            BoothError::InvalidCoordinateRange { field, .. } => {
                format!("Coordonnée invalide ({}).", field)
            }
            BoothError::ValidationError { field, message } => {
                format!("Champ '{}' invalide : {}", field, message)
            }
            BoothError::ConfigError { .. } | BoothError::InvalidConfigValueError { .. } => {
                format!("Configuration invalide : {}", self)
            }
            BoothError::DispatchError { .. } | BoothError::HttpError(_) => {
                "L'envoi de la demande a échoué.".to_string()
            }
            BoothError::IoError(_) | BoothError::SerializationError(_) => {
                "Erreur système inattendue.".to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BoothError::GeolocationUnavailable => {
                "Indiquez votre position manuellement avec --lat et --lon"
            }
            BoothError::GeolocationPermissionDenied => {
                "Autorisez l'accès à la position puis relancez la vérification"
            }
            BoothError::GeolocationError { .. } => "Relancez la vérification de position",
            BoothError::UnknownPackage { .. } => "Choisissez une formule existante (commande 'packages')",
            BoothError::InvalidCoordinateRange { .. } => {
                "La latitude doit être entre -90 et 90, la longitude entre -180 et 180"
            }
            BoothError::ValidationError { .. } => "Corrigez le champ indiqué et réessayez",
            BoothError::ConfigError { .. } | BoothError::InvalidConfigValueError { .. } => {
                "Vérifiez le fichier de configuration TOML"
            }
            BoothError::DispatchError { .. } | BoothError::HttpError(_) => {
                "Réessayez plus tard ou utilisez le canal mailto"
            }
            BoothError::IoError(_) | BoothError::SerializationError(_) => {
                "Relancez la commande avec --verbose pour plus de détails"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BoothError>;
