use derive_more::{Display, Error};

/// CSR-MST custom error
#[derive(Debug, Display, Error, PartialEq)]
pub enum MSTError {
    #[display(fmt = "{}", message)]
    NotSymmetric { message: String },
    #[display(fmt = "{}", message)]
    InvalidRoot { message: String },
    #[display(fmt = "{}", message)]
    InvalidRowPointers { message: String },
    #[display(fmt = "{}", message)]
    InvalidColumnIndex { message: String },
    #[display(fmt = "{}", message)]
    InvalidWeight { message: String },
    #[display(fmt = "{}", message)]
    Internal { message: String },
}

impl MSTError {
    /// Return the name of this error
    pub fn name(&self) -> String {
        match self {
            Self::NotSymmetric { .. } => "Graph Not Symmetric".to_string(),
            Self::InvalidRoot { .. } => "Invalid Root".to_string(),
            Self::InvalidRowPointers { .. } => "Invalid Row Pointers".to_string(),
            Self::InvalidColumnIndex { .. } => "Invalid Column Index".to_string(),
            Self::InvalidWeight { .. } => "Invalid Weight".to_string(),
            Self::Internal { .. } => "Internal Error".to_string()
        }
    }

    /// Returns `true` if this error was caused by the caller's input
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::Internal { .. })
    }
}
