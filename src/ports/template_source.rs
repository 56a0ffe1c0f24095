use crate::domain::{AppError, Node};

/// A named template definition ready for registration.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateDefinition {
    pub name: String,
    pub structure: Node,
}

/// Port for loading page templates.
pub trait TemplateSource {
    /// Page template definitions, in registration order.
    fn templates(&self) -> Result<Vec<TemplateDefinition>, AppError>;
}
