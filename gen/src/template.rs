//! The wrapper document template and its checked substitution step.
//!
//! The generator supports exactly one document shape: the enum wrapper
//! class. Its template is a fixed string with six named placeholders, and
//! the set of placeholders is closed over [`TemplateVar`] - substitution is
//! not free-form interpolation. Two properties follow:
//!
//! - [`TemplateContext`] carries one required field per variable, so
//!   forgetting to supply a placeholder value is a compile error, not a
//!   stray `{classname}` in the output.
//! - [`render`] rejects any `{token}` in the template that does not name a
//!   [`TemplateVar`], so renaming a placeholder on one side only is a hard
//!   error instead of a silently unsubstituted token.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::errors::GeneratorError;

/// The fixed document template for a generated wrapper class.
///
/// Placeholders are `{snake_case}` tokens naming a [`TemplateVar`]. The
/// generated class stores the underlying enumeration value verbatim, parses
/// strings by lowercasing, hashing with the consuming project's `jHash`,
/// and dispatching on the hash; unmatched strings leave it in the
/// `INVALID` sentinel, and converting an invalid wrapper back to the
/// underlying type asserts. The `default:` branch of the string conversion
/// and the `INVALID` sentinel are part of the fixed scaffolding, not of the
/// generated fragments.
pub const WRAPPER_TEMPLATE: &str = r#"
class {classname}
{
public:
    {classname}({enumtype} v = {enumdefault}) :
    m_value(v)
    {}

    {classname}(const std::string &str) : m_value(INVALID)
    {
        std::string s(str);
        std::transform(s.begin(), s.end(), s.begin(), ::tolower);
        const uint32_t hash = jHash(s);
        switch (hash) {
{string_to_enum_case}
        }
    }

    inline operator {enumtype}() const {
        assert(m_value != INVALID);
        return static_cast<{enumtype}>(m_value);
    }

    operator const char*() const {
        switch (m_value) {
{enum_to_string_case}
        default:
            return "unknown";
        }
    }

    inline bool operator== (const {classname} &v) const {
        return m_value == v.m_value;
    }

    inline bool operator!= (const {classname} &v) const {
        return m_value != v.m_value;
    }

    inline bool operator< (const {classname} &v) const {
        return m_value < v.m_value;
    }

    inline bool operator> (const {classname} &v) const {
        return m_value > v.m_value;
    }

    inline bool operator<= (const {classname} &v) const {
        return m_value <= v.m_value;
    }

    inline bool operator>= (const {classname} &v) const {
        return m_value >= v.m_value;
    }

    static const std::vector<{classname}>& values() {
        return VALUES;
    }


private:

    const static int INVALID = 0x7FFFFFFF;
    const static std::vector<{classname}> VALUES;

    static std::vector<{classname}> allValues()
    {
         // C++11 Initializer lists would make this much easier
        std::vector<{classname}> vec;
{pushback_all_values}
        return vec;
    }

    friend std::istream& operator>> (std::istream &is, {classname} &v)
    {
        std::string val;
        is >> val;
        {classname} tmp(val);
        v.m_value = tmp.m_value;
        return is;
    }

    friend std::ostream& operator<< (std::ostream &os, {classname} &v)
    {
        const char* val = static_cast<const char*>(v);
        os << val;
        return os;
    }

    int m_value;
};

const std::vector<{classname}> {classname}::VALUES = {classname}::allValues();

template <>
struct TCLAP::ArgTraits<{classname}>
{
    typedef ValueLike ValueCategory;
};
"#;

/// Matches a `{placeholder}` token. Bare C++ braces never wrap a single
/// lowercase identifier, so this cannot misfire on the template's own code.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([a-z][a-z0-9_]*)\}").expect("placeholder pattern is valid")
});

/// The closed set of template variables.
///
/// Every placeholder the wrapper template may contain is a variant here;
/// the `Display` form (snake_case) is the placeholder name.
///
/// ## Examples
///
/// ```
/// use enumclad_gen::template::TemplateVar;
///
/// assert_eq!(TemplateVar::Classname.to_string(), "classname");
/// assert_eq!(TemplateVar::StringToEnumCase.token(), "{string_to_enum_case}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum TemplateVar {
    /// Name of the generated wrapper class.
    Classname,
    /// Name of the underlying enumeration type.
    Enumtype,
    /// Symbol used as the wrapper's default value.
    Enumdefault,
    /// Dispatch cases of the string constructor.
    StringToEnumCase,
    /// Dispatch cases of the string conversion.
    EnumToStringCase,
    /// Registration statements of the all-values list.
    PushbackAllValues,
}

impl TemplateVar {
    /// The literal token this variable matches in a template, braces
    /// included.
    pub fn token(&self) -> String {
        format!("{{{}}}", self)
    }
}

/// Values for every template variable.
///
/// All fields are required, so constructing a context that misses a
/// placeholder does not compile.
#[derive(Debug, Clone)]
pub struct TemplateContext {
    pub classname: String,
    pub enumtype: String,
    pub enumdefault: String,
    pub string_to_enum_case: String,
    pub enum_to_string_case: String,
    pub pushback_all_values: String,
}

impl TemplateContext {
    /// Returns the substitution value for the given variable.
    pub fn get(&self, var: TemplateVar) -> &str {
        match var {
            TemplateVar::Classname => &self.classname,
            TemplateVar::Enumtype => &self.enumtype,
            TemplateVar::Enumdefault => &self.enumdefault,
            TemplateVar::StringToEnumCase => &self.string_to_enum_case,
            TemplateVar::EnumToStringCase => &self.enum_to_string_case,
            TemplateVar::PushbackAllValues => &self.pushback_all_values,
        }
    }
}

/// Substitutes every template variable into `template`.
///
/// Placeholder tokens are checked against the closed [`TemplateVar`] set
/// before any substitution happens, so a template carrying a stray or
/// misspelled token fails as a whole rather than rendering partially.
///
/// ## Errors
///
/// Returns [`GeneratorError::UnknownPlaceholder`] if the template contains
/// a `{token}` that does not name a [`TemplateVar`].
///
/// ## Examples
///
/// ```
/// use enumclad_gen::template::{render, TemplateContext};
///
/// let ctx = TemplateContext {
///     classname: "Compression".to_string(),
///     enumtype: "OpenEXRIO::Compression".to_string(),
///     enumdefault: "OpenEXRIO::None".to_string(),
///     string_to_enum_case: String::new(),
///     enum_to_string_case: String::new(),
///     pushback_all_values: String::new(),
/// };
///
/// let out = render("class {classname} wraps {enumtype}", &ctx).unwrap();
/// assert_eq!(out, "class Compression wraps OpenEXRIO::Compression");
/// ```
pub fn render(template: &str, ctx: &TemplateContext) -> Result<String, GeneratorError> {
    for caps in PLACEHOLDER.captures_iter(template) {
        let name = &caps[1];
        if TemplateVar::from_str(name).is_err() {
            return Err(GeneratorError::UnknownPlaceholder {
                name: name.to_string(),
            });
        }
    }

    let mut out = template.to_string();
    for var in TemplateVar::iter() {
        out = out.replace(&var.token(), ctx.get(var));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_context() -> TemplateContext {
        TemplateContext {
            classname: "Compression".to_string(),
            enumtype: "OpenEXRIO::Compression".to_string(),
            enumdefault: "OpenEXRIO::None".to_string(),
            string_to_enum_case: "CASES_A".to_string(),
            enum_to_string_case: "CASES_B".to_string(),
            pushback_all_values: "PUSHBACKS".to_string(),
        }
    }

    #[test]
    fn every_variable_occurs_in_the_wrapper_template() {
        for var in TemplateVar::iter() {
            assert!(
                WRAPPER_TEMPLATE.contains(&var.token()),
                "template is missing {}",
                var.token()
            );
        }
    }

    #[test]
    fn wrapper_template_has_no_unknown_placeholders() {
        assert!(render(WRAPPER_TEMPLATE, &make_context()).is_ok());
    }

    #[test]
    fn render_substitutes_all_occurrences() {
        let out = render(WRAPPER_TEMPLATE, &make_context()).unwrap();
        for var in TemplateVar::iter() {
            assert!(
                !out.contains(&var.token()),
                "unsubstituted {} in output",
                var.token()
            );
        }
        assert!(out.contains("class Compression"));
        assert!(out.contains("CASES_A"));
        assert!(out.contains("CASES_B"));
        assert!(out.contains("PUSHBACKS"));
    }

    #[test]
    fn render_keeps_fixed_scaffolding() {
        let out = render(WRAPPER_TEMPLATE, &make_context()).unwrap();
        // The sentinel and the fallback branch live in the template, not in
        // the fragments.
        assert!(out.contains("const static int INVALID = 0x7FFFFFFF;"));
        assert!(out.contains("return \"unknown\";"));
        assert!(out.contains("assert(m_value != INVALID);"));
        assert!(out.contains("struct TCLAP::ArgTraits<Compression>"));
    }

    #[test]
    fn unknown_placeholder_is_rejected() {
        let err = render("hello {typo} world", &make_context()).unwrap_err();
        match err {
            GeneratorError::UnknownPlaceholder { name } => assert_eq!(name, "typo"),
            other => panic!("Expected UnknownPlaceholder, got: {:?}", other),
        }
    }

    #[test]
    fn unknown_placeholder_fails_before_any_substitution() {
        // The error names the stray token even when valid placeholders
        // precede it.
        let err = render("{classname} and {clasname}", &make_context()).unwrap_err();
        match err {
            GeneratorError::UnknownPlaceholder { name } => assert_eq!(name, "clasname"),
            other => panic!("Expected UnknownPlaceholder, got: {:?}", other),
        }
    }

    #[test]
    fn bare_braces_are_not_placeholders() {
        let out = render("void f() {}", &make_context()).unwrap();
        assert_eq!(out, "void f() {}");
    }

    #[test]
    fn variable_names_parse_back_from_tokens() {
        for var in TemplateVar::iter() {
            assert_eq!(TemplateVar::from_str(&var.to_string()).unwrap(), var);
        }
    }
}
