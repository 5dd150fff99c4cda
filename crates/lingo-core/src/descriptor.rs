//! The [`Descriptor`] record: everything the engine knows about one
//! language or file type, plus the builder used to construct one.

use regex::Regex;

use crate::magic::MagicRule;

/// Normalized form of a language name; the key space for catalog
/// registration and conformance walks.
pub(crate) fn norm(name: &str) -> String {
    name.to_lowercase()
}

/// A filename-based identification rule: either an exact name
/// (`"Makefile"`) or a regex pattern (`^[Mm]akefile.*$`).
#[derive(Debug, Clone)]
pub enum FilenameRule {
    Exact(String),
    Pattern(Regex),
}

/// One XML doctype a language claims: `(flavour, common name, public id,
/// system id)`. Either id may be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctypeRule {
    pub flavour: Option<String>,
    pub common_name: String,
    pub public_id: Option<String>,
    pub system_id: Option<String>,
}

impl DoctypeRule {
    pub fn new(
        flavour: Option<&str>,
        common_name: &str,
        public_id: Option<&str>,
        system_id: Option<&str>,
    ) -> Self {
        Self {
            flavour: flavour.map(str::to_owned),
            common_name: common_name.to_owned(),
            public_id: public_id.map(str::to_owned),
            system_id: system_id.map(str::to_owned),
        }
    }
}

/// An immutable record describing one language/file type: its identifying
/// clues (extensions, filename rules, magic numbers, doctypes, editor-mode
/// aliases) and the names of other descriptors it conforms to.
///
/// Descriptors are constructed through [`Descriptor::builder`] and become
/// immutable once registered in a [`Catalog`](crate::Catalog). Metadata
/// left unset here may still be answered through conformance: see
/// [`Lang::conformant_attr`](crate::Lang::conformant_attr).
#[derive(Debug, Clone)]
pub struct Descriptor {
    name: String,
    extensions: Vec<String>,
    filename_rules: Vec<FilenameRule>,
    magic_rules: Vec<MagicRule>,
    doctype_rules: Vec<DoctypeRule>,
    mode_aliases: Vec<String>,
    default_encoding: Option<String>,
    encoding_decl_pattern: Option<Regex>,
    conforms_to: Vec<String>,
}

impl Descriptor {
    /// Start building a descriptor with the given display name.
    pub fn builder(name: impl Into<String>) -> DescriptorBuilder {
        DescriptorBuilder {
            descriptor: Descriptor {
                name: name.into(),
                extensions: Vec::new(),
                filename_rules: Vec::new(),
                magic_rules: Vec::new(),
                doctype_rules: Vec::new(),
                mode_aliases: Vec::new(),
                default_encoding: None,
                encoding_decl_pattern: None,
                conforms_to: Vec::new(),
            },
        }
    }

    /// Display name (`"Python"`, `"Bourne shell"`, ...).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Filename extensions, conventionally starting with `.`.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn filename_rules(&self) -> &[FilenameRule] {
        &self.filename_rules
    }

    pub fn magic_rules(&self) -> &[MagicRule] {
        &self.magic_rules
    }

    pub fn doctype_rules(&self) -> &[DoctypeRule] {
        &self.doctype_rules
    }

    /// Editor major-mode names (other than [`name`](Self::name)) that
    /// identify this language.
    pub fn mode_aliases(&self) -> &[String] {
        &self.mode_aliases
    }

    /// The encoding this language mandates, if any. Not conformance-aware;
    /// see [`Lang::default_encoding`](crate::Lang::default_encoding).
    pub fn default_encoding(&self) -> Option<&str> {
        self.default_encoding.as_deref()
    }

    /// Regex matching an in-file encoding declaration, if the language has
    /// one (Python's `coding:`, CSS's `@charset`, ...).
    pub fn encoding_decl_pattern(&self) -> Option<&Regex> {
        self.encoding_decl_pattern.as_ref()
    }

    /// Names of the descriptors this one directly conforms to.
    pub fn conforms_to(&self) -> &[String] {
        &self.conforms_to
    }

    pub(crate) fn norm_name(&self) -> String {
        norm(&self.name)
    }
}

/// Builder for [`Descriptor`]. All methods consume and return `self` for
/// chaining; `build` cannot fail (rule validation happens where rules are
/// parsed from untyped sources, and again at index time).
#[derive(Debug)]
pub struct DescriptorBuilder {
    descriptor: Descriptor,
}

impl DescriptorBuilder {
    /// Declare the names this descriptor conforms to, in precedence order.
    pub fn conforms_to<I, S>(mut self, bases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.descriptor
            .conforms_to
            .extend(bases.into_iter().map(Into::into));
        self
    }

    /// Add filename extensions (each conventionally starting with `.`).
    pub fn extensions<I, S>(mut self, exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.descriptor
            .extensions
            .extend(exts.into_iter().map(Into::into));
        self
    }

    /// Add exact-match filenames.
    pub fn filenames<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.descriptor.filename_rules.extend(
            names
                .into_iter()
                .map(|n| FilenameRule::Exact(n.into())),
        );
        self
    }

    /// Add a filename regex pattern.
    pub fn filename_pattern(mut self, pattern: Regex) -> Self {
        self.descriptor
            .filename_rules
            .push(FilenameRule::Pattern(pattern));
        self
    }

    /// Add a magic-number rule. Rule order is probe order.
    pub fn magic(mut self, rule: MagicRule) -> Self {
        self.descriptor.magic_rules.push(rule);
        self
    }

    /// Add a doctype rule.
    pub fn doctype(mut self, rule: DoctypeRule) -> Self {
        self.descriptor.doctype_rules.push(rule);
        self
    }

    /// Add editor-mode aliases.
    pub fn mode_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.descriptor
            .mode_aliases
            .extend(aliases.into_iter().map(Into::into));
        self
    }

    pub fn default_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.descriptor.default_encoding = Some(encoding.into());
        self
    }

    pub fn encoding_decl_pattern(mut self, pattern: Regex) -> Self {
        self.descriptor.encoding_decl_pattern = Some(pattern);
        self
    }

    pub fn build(self) -> Descriptor {
        self.descriptor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::magic::{MagicRule, NumberLayout};

    #[test]
    fn builder_collects_all_fields() {
        let d = Descriptor::builder("Widget")
            .conforms_to(["Text"])
            .extensions([".wdg", ".widget"])
            .filenames(["Widgetfile"])
            .filename_pattern(Regex::new(r"^widget\..*$").unwrap())
            .magic(MagicRule::bytes(0, &b"WDG"[..]))
            .magic(MagicRule::number(4, NumberLayout::U32Be, 7))
            .doctype(DoctypeRule::new(
                None,
                "widget",
                Some("-//W//DTD Widget//EN"),
                None,
            ))
            .mode_aliases(["widget-mode"])
            .default_encoding("utf-8")
            .encoding_decl_pattern(Regex::new(r"encoding=(?P<encoding>[\w-]+)").unwrap())
            .build();

        assert_eq!(d.name(), "Widget");
        assert_eq!(d.conforms_to(), ["Text"]);
        assert_eq!(d.extensions(), [".wdg", ".widget"]);
        assert_eq!(d.filename_rules().len(), 2);
        assert_eq!(d.magic_rules().len(), 2);
        assert_eq!(d.doctype_rules().len(), 1);
        assert_eq!(d.mode_aliases(), ["widget-mode"]);
        assert_eq!(d.default_encoding(), Some("utf-8"));
        assert!(d.encoding_decl_pattern().is_some());
    }

    #[test]
    fn minimal_descriptor_has_empty_clue_sets() {
        let d = Descriptor::builder("Bare").build();
        assert_eq!(d.name(), "Bare");
        assert!(d.extensions().is_empty());
        assert!(d.filename_rules().is_empty());
        assert!(d.magic_rules().is_empty());
        assert!(d.doctype_rules().is_empty());
        assert!(d.mode_aliases().is_empty());
        assert!(d.conforms_to().is_empty());
        assert_eq!(d.default_encoding(), None);
        assert!(d.encoding_decl_pattern().is_none());
    }

    #[test]
    fn norm_name_lowercases() {
        let d = Descriptor::builder("Bourne Shell").build();
        assert_eq!(d.norm_name(), "bourne shell");
        assert_eq!(norm("HTML"), "html");
    }

    #[test]
    fn doctype_rule_optional_ids() {
        let dt = DoctypeRule::new(Some("HTML 3.2"), "HTML", Some("-//W3C//DTD HTML 3.2 Final//EN"), None);
        assert_eq!(dt.flavour.as_deref(), Some("HTML 3.2"));
        assert_eq!(dt.system_id, None);
    }
}
