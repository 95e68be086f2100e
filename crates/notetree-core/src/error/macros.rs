//! Error macros for notetree

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::NoteError::invalid_value($context, $value))
    };
}

/// Macro for creating not-found errors for notes
#[macro_export]
macro_rules! bail_note_not_found {
    ($id:expr) => {
        return Err($crate::error::NoteError::NoteNotFound {
            id: $id.to_string(),
        })
    };
}
