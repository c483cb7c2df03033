//! Script-language (JavaScript/TypeScript) rule table.
//!
//! Declaration and control-flow keywords, well-known global-object access,
//! statement punctuation, and code-continuation shapes.

use super::built_in_rule;
use crate::segmenter::types::{ClassificationRule, Dialect, RuleKind};

/// The script dialect table, in precedence order.
pub fn rules() -> Vec<ClassificationRule> {
    use Dialect::Script;
    use RuleKind::{CodeContinuation, CodeStart};

    vec![
        // Definite code starts.
        built_in_rule(
            "sc_declaration",
            r"^(const|let|var|function|class|interface|type|enum)\s+\w+",
            CodeStart,
            Script,
            "Declaration keyword followed by an identifier",
        ),
        built_in_rule(
            "sc_control_flow",
            r"^(if|else|for|while|switch|try|catch|async|await)\s*[(<]",
            CodeStart,
            Script,
            "Control-flow keyword followed by ( or <",
        ),
        built_in_rule(
            "sc_arrow_block",
            r"^=>\s*[{\[]",
            CodeStart,
            Script,
            "Arrow function body opener",
        ),
        built_in_rule(
            "sc_bare_punct",
            r"^[{}();]\s*$",
            CodeStart,
            Script,
            "Line consisting of statement punctuation only",
        ),
        built_in_rule(
            "sc_trailing_punct",
            r"[{}();]\s*$",
            CodeStart,
            Script,
            "Trailing statement punctuation ({, }, (, ), ;)",
        ),
        built_in_rule(
            "sc_console",
            r"^\s*console\.(log|error|warn|info|debug)",
            CodeStart,
            Script,
            "console method call",
        ),
        built_in_rule(
            "sc_document",
            r"^\s*document\.(getElementById|querySelector|addEventListener)",
            CodeStart,
            Script,
            "document method call",
        ),
        built_in_rule(
            "sc_window",
            r"^\s*window\.(location|history|localStorage|sessionStorage)",
            CodeStart,
            Script,
            "window property access",
        ),
        built_in_rule(
            "sc_navigator",
            r"^\s*navigator\.(userAgent|share|geolocation|clipboard)",
            CodeStart,
            Script,
            "navigator property access",
        ),
        built_in_rule(
            "sc_fetch",
            r"^\s*(fetch\(|XMLHttpRequest|axios\.)",
            CodeStart,
            Script,
            "HTTP request API",
        ),
        built_in_rule(
            "sc_import",
            r#"^\s*import\s+.*\s+from\s+['"]"#,
            CodeStart,
            Script,
            "ES module import",
        ),
        built_in_rule(
            "sc_require",
            r#"^\s*require\(['"]"#,
            CodeStart,
            Script,
            "CommonJS require",
        ),
        built_in_rule(
            "sc_promise",
            r"^\s*Promise\.(resolve|reject|all|race)",
            CodeStart,
            Script,
            "Promise static method",
        ),
        built_in_rule(
            "sc_timers",
            r"^\s*set(Timeout|Interval)\(",
            CodeStart,
            Script,
            "Timer API call",
        ),
        built_in_rule(
            "sc_listeners",
            r"^\s*(add|remove)EventListener\(",
            CodeStart,
            Script,
            "Event listener registration",
        ),
        built_in_rule(
            "sc_json",
            r"^\s*JSON\.(parse|stringify)",
            CodeStart,
            Script,
            "JSON method call",
        ),
        built_in_rule(
            "sc_storage",
            r"^\s*(localStorage|sessionStorage)\.(getItem|setItem|removeItem)",
            CodeStart,
            Script,
            "Web storage access",
        ),
        built_in_rule(
            "sc_new_builtin",
            r"^\s*new\s+(Date|Array|Object|RegExp|Error)",
            CodeStart,
            Script,
            "Construction of a well-known built-in",
        ),
        // Continuations: only meaningful after a preceding code line.
        built_in_rule(
            "cc_chain",
            r"^\.(then|catch|finally|map|filter|reduce|forEach)\(",
            CodeContinuation,
            Script,
            "Chained method call starting with .",
        ),
        built_in_rule(
            "cc_member_ops",
            r"^\.(length|push|pop|shift|unshift|slice|splice)",
            CodeContinuation,
            Script,
            "Chained member access",
        ),
        built_in_rule(
            "cc_leading_punct",
            r"^[=:;{}()\[\],]",
            CodeContinuation,
            Script,
            "Leading operator or punctuation",
        ),
        built_in_rule(
            "cc_ident_punct",
            r"^[a-zA-Z_$][a-zA-Z0-9_$]*\s*[=:;{}()\[\],]",
            CodeContinuation,
            Script,
            "Identifier immediately followed by operator/punctuation",
        ),
        built_in_rule(
            "cc_close_reopen",
            r"^\}\s*(else|catch|finally|while|for)\s*[({]?",
            CodeContinuation,
            Script,
            "Closing brace re-opening a clause (} else {, } catch (, ...)",
        ),
    ]
}
