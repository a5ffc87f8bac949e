//! Built-in C ↔ C🥖 keyword list
//!
//! Order matters only for display and for direction probing: the first pair
//! whose two spellings differ is used as the marker pair.

use super::{KeywordCategory, KeywordMapping};

const fn kw(
    origin: &'static str,
    target: &'static str,
    category: KeywordCategory,
    description: &'static str,
) -> KeywordMapping {
    KeywordMapping {
        origin,
        target,
        category,
        description: Some(description),
    }
}

use KeywordCategory::*;

pub static KEYWORDS: &[KeywordMapping] = &[
    // Data types
    kw("void", "néant", Type, "Empty type"),
    kw("char", "caractère", Type, "Character"),
    kw("int", "entier", Type, "Integer"),
    kw("float", "flottant", Type, "Floating-point number"),
    kw("double", "flottantprécis", Type, "Double-precision float"),
    kw("short", "entiercourt", Type, "Short integer"),
    kw("long", "entierlong", Type, "Long integer"),
    kw("signed", "ouijeveuxlesigne", Type, "Signed"),
    kw("unsigned", "jmencarrelaracedusigne", Type, "Unsigned"),
    kw("bool", "boule", Type, "Boolean"),
    // Control flow
    kw("if", "si", ControlFlow, "Conditional"),
    kw("else", "sinon", ControlFlow, "Alternative branch"),
    kw("switch", "enfonctionde", ControlFlow, "Multi-way selection"),
    kw("case", "lorsque", ControlFlow, "Switch case"),
    kw("default", "pardéfaut", ControlFlow, "Default switch case"),
    kw("for", "pour", ControlFlow, "For loop"),
    kw("while", "tantque", ControlFlow, "While loop"),
    kw("do", "faire", ControlFlow, "Do-while loop"),
    kw("break", "arrêter", ControlFlow, "Leave a loop"),
    kw("continue", "continuer", ControlFlow, "Skip to the next iteration"),
    kw("return", "retourner", ControlFlow, "Return a value"),
    kw("goto", "allerà", ControlFlow, "Jump to a label"),
    // Storage specifiers
    kw("auto", "automatique", Storage, "Automatic variable"),
    kw("static", "statique", Storage, "Static variable"),
    kw("extern", "externe", Storage, "External variable"),
    kw("typedef", "enregistrertype", Storage, "Type definition"),
    kw("thread_local", "fillocal", Storage, "Thread-local variable"),
    // Qualifiers
    kw("const", "constante", Qualifier, "Constant value"),
    kw("volatile", "volatile", Qualifier, "Volatile variable"),
    kw("restrict", "restreint", Qualifier, "Non-aliased pointer"),
    kw("inline", "linéarisé", Qualifier, "Inline function"),
    // Compound types and operators
    kw("struct", "classe", Type, "Structure"),
    kw("union", "union", Type, "Union"),
    kw("enum", "énumération", Type, "Enumeration"),
    kw("sizeof", "taillede", Operator, "Size in bytes"),
    // Constants
    kw("true", "vrai", Constant, "True"),
    kw("false", "faux", Constant, "False"),
    kw("nullptr", "pointeurverslenéant", Constant, "Null pointer"),
    // C11 / C23
    kw("alignas", "alignercomme", Qualifier, "Alignment"),
    kw("alignof", "alignementde", Operator, "Alignment of a type"),
    kw("constexpr", "expressionconstante", Qualifier, "Constant expression"),
    kw("static_assert", "ouijesuissurque", Other, "Static assertion"),
    kw("typeof", "typede", Operator, "Type of an expression"),
    kw(
        "typeof_unqual",
        "typedequalifié",
        Operator,
        "Unqualified type of an expression",
    ),
];
