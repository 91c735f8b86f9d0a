use thiserror::Error;

/// Erreurs de saisie ou de contrôle d'une liste de numéros.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumberError {
    /// Jeton non numérique dans une liste séparée par des virgules
    #[error("{label} : '{token}' n'est pas un nombre entier (ex: 3,8,21)")]
    InputFormat { label: String, token: String },

    #[error("{label} : {number} hors limites (1-45)")]
    Range { label: String, number: i64 },

    #[error("{label} : numéro en double : {number}")]
    Duplicate { label: String, number: u8 },

    #[error("Attendu {expected} numéros, reçu {found}")]
    Count { expected: usize, found: usize },
}
