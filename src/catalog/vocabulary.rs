//! Built-in vocabulary of the aym teaching language
//!
//! Declaration order is significant: completion output preserves it so that
//! aliases stay next to the token they alias.

use super::{SnippetEntry, VocabularyEntry};

pub(crate) const KEYWORDS: &[VocabularyEntry] = &[
    // Program structure
    VocabularyEntry::new("qallta", "Inicio de programa"),
    VocabularyEntry::new("tukuya", "Fin de programa"),
    VocabularyEntry::new("yatiya", "Declaración de variable"),
    VocabularyEntry::new("qillqa", "Imprimir salida"),
    // Control flow
    VocabularyEntry::new("suti", "Condicional (alias de jisa)"),
    VocabularyEntry::new("jisa", "Condicional if"),
    VocabularyEntry::new("jani", "Condicional else"),
    VocabularyEntry::new("maysatxa", "Condicional else (alias)"),
    VocabularyEntry::new("kunawsati", "Bucle while"),
    VocabularyEntry::new("ukhakamaxa", "Bucle while (alias)"),
    VocabularyEntry::new("sapüru", "Bucle for"),
    VocabularyEntry::new("taki", "Bucle for (alias)"),
    VocabularyEntry::new("p'akhiña", "Salir de bucle"),
    VocabularyEntry::new("sarantaña", "Continuar bucle"),
    // Functions and modules
    VocabularyEntry::new("lurawi", "Definir función"),
    VocabularyEntry::new("kuttaya", "Retornar valor"),
    VocabularyEntry::new("apnaq", "Importar módulo"),
    // Exceptions
    VocabularyEntry::new("yant'aña", "Bloque try"),
    VocabularyEntry::new("katjaña", "Bloque catch"),
    VocabularyEntry::new("tukuyawi", "Bloque finally"),
    VocabularyEntry::new("pantja", "Lanzar error"),
    // Classes
    VocabularyEntry::new("kasta", "Declarar clase"),
    VocabularyEntry::new("machaqa", "Crear instancia (new)"),
    VocabularyEntry::new("aka", "Referencia this"),
    VocabularyEntry::new("jila", "Herencia (extends)"),
    VocabularyEntry::new("jikxata", "Sobrescribir método"),
    VocabularyEntry::new("sapa", "Modificador privado"),
    VocabularyEntry::new("taqi", "Modificador público"),
    VocabularyEntry::new("sapakasta", "Modificador static"),
    VocabularyEntry::new("uñt'aya", "Getter"),
    VocabularyEntry::new("chura", "Setter"),
    VocabularyEntry::new("jilaaka", "Referencia super"),
];

pub(crate) const TYPES: &[VocabularyEntry] = &[
    VocabularyEntry::new("jakhüwi", "Tipo número"),
    VocabularyEntry::new("aru", "Tipo cadena"),
    VocabularyEntry::new("listaña", "Tipo lista"),
    VocabularyEntry::new("t'aqa", "Tipo lista (alias)"),
    VocabularyEntry::new("mapa", "Tipo mapa"),
];

pub(crate) const LITERALS: &[VocabularyEntry] = &[
    VocabularyEntry::new("utji", "Literal verdadero (true)"),
    VocabularyEntry::new("chiqa", "Literal verdadero (alias)"),
    VocabularyEntry::new("janiutji", "Literal falso (false)"),
    VocabularyEntry::new("k'ari", "Literal falso (alias)"),
];

pub(crate) const SNIPPETS: &[SnippetEntry] = &[
    SnippetEntry::new(
        "qallta ... tukuya",
        "Plantilla de programa",
        "qallta\n\t$0\ntukuya",
    ),
    SnippetEntry::new(
        "jisa",
        "Condicional if",
        "jisa (${1:condicion}) {\n\t$0\n}",
    ),
    SnippetEntry::new(
        "jisa ... maysatxa",
        "Condicional if/else",
        "jisa (${1:condicion}) {\n\t$2\n} maysatxa {\n\t$0\n}",
    ),
    SnippetEntry::new(
        "ukhakamaxa",
        "Bucle while",
        "ukhakamaxa (${1:condicion}) {\n\t$0\n}",
    ),
    SnippetEntry::new(
        "taki",
        "Bucle for",
        "taki (${1:inicializacion}; ${2:condicion}; ${3:incremento}) {\n\t$0\n}",
    ),
    SnippetEntry::new(
        "lurawi",
        "Definir función",
        "lurawi ${1:nombre}(${2:parametros}) {\n\t$0\n}",
    ),
    SnippetEntry::new(
        "kasta",
        "Declarar clase",
        "kasta ${1:Nombre} {\n\t$0\n}",
    ),
    SnippetEntry::new(
        "yant'aña",
        "Bloque try/catch/finally",
        "yant'aña {\n\t$1\n} katjaña (${2:error}) {\n\t$3\n} tukuyawi {\n\t$0\n}",
    ),
];
