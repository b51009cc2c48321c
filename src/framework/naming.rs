//! # Name Derivation
//!
//! Every key a resource registers is derived from two identifiers: the `scope`
//! (the owning feature) and the `name` (the resource kind). This module turns the
//! raw strings handed to the constructor into those identifiers and builds the
//! fully-qualified action types from them.
//!
//! | input | derived |
//! |-------|---------|
//! | scope `"blog-admin"` | `blogAdmin` |
//! | name `"Comments"` | `comment` (singular, lower camel case) |
//! | `many_name()` | `comments` |
//! | `localise("setPage")` | `blogAdmin/comment/SET_PAGE` |

use crate::framework::error::ResourceError;
use heck::{ToLowerCamelCase, ToShoutySnakeCase};

/// Returns the English plural of `word`, irregular nouns included.
pub fn plural(word: &str) -> String {
    pluralizer::pluralize(word, 2, false)
}

/// Returns the English singular of `word`, irregular nouns included.
pub fn singular(word: &str) -> String {
    pluralizer::pluralize(word, 1, false)
}

/// Normalised identifiers for a single resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Names {
    scope: String,
    name: String,
}

impl Names {
    /// Normalises `scope` to lower camel case and `name` to its singular lower camel case form.
    ///
    /// Fails with [`ResourceError::InvalidArgument`] when either input is blank or
    /// contains nothing that survives normalisation (e.g. `"--"`).
    pub fn new(scope: &str, name: &str) -> Result<Self, ResourceError> {
        let scope = scope.to_lower_camel_case();
        if scope.is_empty() {
            return Err(ResourceError::invalid("scope", "Resource::new", "a non-empty string"));
        }
        let name = name.trim();
        let name = if name.is_empty() {
            String::new()
        } else {
            singular(name).to_lower_camel_case()
        };
        if name.is_empty() {
            return Err(ResourceError::invalid("name", "Resource::new", "a non-empty string"));
        }
        Ok(Self { scope, name })
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field holding the collection of items. Always recomputed from `name`.
    pub fn many_name(&self) -> String {
        plural(&self.name)
    }

    /// Field holding the current single item. Always recomputed from `name`.
    pub fn single_name(&self) -> String {
        singular(&self.name)
    }

    /// Builds the fully-qualified action type `"<scope>/<name>/<CONSTANT_CASE>"`.
    pub fn localise(&self, kind: &str) -> Result<String, ResourceError> {
        let constant = kind.to_shouty_snake_case();
        if constant.is_empty() {
            return Err(ResourceError::invalid("type", "Resource::localise", "a non-empty string"));
        }
        Ok(format!("{}/{}/{}", self.scope, self.name, constant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_and_name_are_normalised() {
        let names = Names::new("blog-admin", "comments").unwrap();
        assert_eq!(names.scope(), "blogAdmin");
        assert_eq!(names.name(), "comment");
    }

    #[test]
    fn test_multi_word_name_is_camel_cased_after_singularising() {
        let names = Names::new("app", "blog posts").unwrap();
        assert_eq!(names.name(), "blogPost");
        assert_eq!(names.many_name(), "blogPosts");
        assert_eq!(names.single_name(), "blogPost");
    }

    #[test]
    fn test_irregular_nouns() {
        let names = Names::new("app", "people").unwrap();
        assert_eq!(names.name(), "person");
        assert_eq!(names.many_name(), "people");
    }

    #[test]
    fn test_localise_constant_cases_the_type() {
        let names = Names::new("app", "example").unwrap();
        assert_eq!(names.localise("setItems").unwrap(), "app/example/SET_ITEMS");
        assert_eq!(names.localise("loading").unwrap(), "app/example/LOADING");
        assert_eq!(names.localise("SET_ITEMS").unwrap(), "app/example/SET_ITEMS");
    }

    #[test]
    fn test_blank_inputs_are_rejected() {
        assert!(matches!(Names::new("", "comment"), Err(ResourceError::InvalidArgument(_))));
        assert!(matches!(Names::new("app", "   "), Err(ResourceError::InvalidArgument(_))));
        let names = Names::new("app", "comment").unwrap();
        assert!(matches!(names.localise(""), Err(ResourceError::InvalidArgument(_))));
    }
}
