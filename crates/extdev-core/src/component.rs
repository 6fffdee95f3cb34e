//! Plugin component types and the naming convention for new components.

use crate::context::token;
use crate::error::{DevError, Result};
use std::str::FromStr;

// ---------------------------------------------------------------------------
// ComponentType
// ---------------------------------------------------------------------------

/// The closed set of plugin component types the host recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentType {
    Auth,
    Admin,
    Syntax,
    Action,
    Renderer,
    Helper,
    Remote,
    Cli,
}

impl ComponentType {
    pub const ALL: [ComponentType; 8] = [
        ComponentType::Auth,
        ComponentType::Admin,
        ComponentType::Syntax,
        ComponentType::Action,
        ComponentType::Renderer,
        ComponentType::Helper,
        ComponentType::Remote,
        ComponentType::Cli,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Auth => "auth",
            ComponentType::Admin => "admin",
            ComponentType::Syntax => "syntax",
            ComponentType::Action => "action",
            ComponentType::Renderer => "renderer",
            ComponentType::Helper => "helper",
            ComponentType::Remote => "remote",
            ComponentType::Cli => "cli",
        }
    }

    /// Skeleton identifier for this component type.
    pub fn skeleton(&self) -> String {
        format!("{}.skel", self.as_str())
    }

    /// Extra tokens only this type's skeleton consumes. Action skeletons
    /// carry a hook-registration line and a stub handler body; no other
    /// type has such extras.
    pub fn extra_tokens(&self) -> Option<[(&'static str, &'static str); 2]> {
        match self {
            ComponentType::Action => Some([
                (token::REGISTER, ACTION_REGISTER),
                (token::HANDLERS, ACTION_HANDLERS),
            ]),
            _ => None,
        }
    }
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentType {
    type Err = DevError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DevError::InvalidComponentType(s.to_string()))
    }
}

const ACTION_REGISTER: &str =
    "        $controller->register_hook('EVENT_NAME', 'AFTER|BEFORE', $this, 'handleEventName');\n   ";

const ACTION_HANDLERS: &str = "    public function handleEventName(Doku_Event $event, $param)\n    {\n    }\n";

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

/// Derived names for one new component of an extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Target file relative to the extension's main directory.
    pub target: String,
    /// Fully qualified class name.
    pub class_name: String,
    /// Short name the component uses to refer to itself.
    pub self_name: String,
}

impl Component {
    /// Apply the naming convention. A named component lives in a
    /// subdirectory of its type; the base component is a single file.
    pub fn derive(ctype: ComponentType, extension: &str, name: Option<&str>) -> Self {
        match name {
            Some(name) => Self {
                target: format!("{ctype}/{name}.php"),
                class_name: format!("{ctype}_plugin_{extension}_{name}"),
                self_name: format!("{extension}_{name}"),
            },
            None => Self {
                target: format!("{ctype}.php"),
                class_name: format!("{ctype}_plugin_{extension}"),
                self_name: extension.to_string(),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
