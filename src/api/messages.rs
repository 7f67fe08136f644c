//! User-facing message catalog.
//!
//! Every fixed string the error boundary sends to a client lives here,
//! outside the dispatch logic, so the locale can be swapped without
//! touching classification. The platform ships French.

/// Catalog of client-facing messages for the fixed-string error kinds.
///
/// `method_not_allowed` is a template: the classifier replaces its `%s`
/// marker with the one supported method for the endpoint.
#[derive(Debug, Clone, Copy)]
pub struct MessageCatalog {
    /// Account exists but was administratively disabled.
    pub account_disabled: &'static str,
    /// Username/password pair did not match.
    pub incorrect_credentials: &'static str,
    /// Authenticated but not allowed to perform the action.
    pub not_enough_permission: &'static str,
    /// Account locked after repeated failures.
    pub account_locked: &'static str,
    /// HTTP method not supported on the endpoint (template, `%s` = method).
    pub method_not_allowed: &'static str,
    /// Generic sanitized message for unclassified server faults.
    pub internal_server_error: &'static str,
    /// Sanitized message for I/O failures during file processing.
    pub error_processing_file: &'static str,
    /// No route matched the requested URL.
    pub no_mapping: &'static str,
}

/// Production catalog.
pub const FRENCH: MessageCatalog = MessageCatalog {
    account_disabled: "Votre compte a été désactivé. S'il s'agit d'une erreur, veuillez contacter l'administration",
    incorrect_credentials: "Nom d'utilisateur / mot de passe incorrect. Veuillez réessayer",
    not_enough_permission: "Vous n'avez pas assez d'autorisation",
    account_locked: "Votre compte a été bloqué. Veuillez contacter l'administration",
    method_not_allowed: "Cette méthode de demande n'est pas autorisée sur ce point de terminaison. Veuillez envoyer une requête '%s'",
    internal_server_error: "Une erreur s'est produite lors du traitement de la demande",
    error_processing_file: "Une erreur s'est produite lors du traitement du fichier",
    no_mapping: "Il n'y a pas de mappage pour cette URL",
};

impl Default for MessageCatalog {
    fn default() -> Self {
        FRENCH
    }
}
