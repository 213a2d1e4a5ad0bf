// End-to-end outline extraction tests

use stractor_python::{EntityKind, Function, PythonParser, SourceFile, SourceParser};
use std::path::Path;

const LLM_CLIENT: &str = include_str!("fixtures/llm_client.py");

fn parse_fixture() -> SourceFile {
    PythonParser::new().parse(LLM_CLIENT).unwrap()
}

fn assert_function(
    actual: &Function,
    name: &str,
    parameters: &str,
    return_type: Option<&str>,
    documentation: Option<&str>,
    body: Option<&str>,
) {
    assert_eq!(actual.name, name);
    assert_eq!(actual.parameters, parameters, "parameters of {name}");
    assert_eq!(actual.return_type.as_deref(), return_type, "return type of {name}");
    assert_eq!(actual.documentation.as_deref(), documentation, "docs of {name}");
    assert_eq!(actual.body.as_deref(), body, "body of {name}");
}

#[test]
fn test_module_level_outline() {
    let file = parse_fixture();

    assert_eq!(file.path, "");
    assert_eq!(file.documentation.as_deref(), Some("top level docs"));
    assert_eq!(
        file.imports,
        vec![
            "import ollama",
            "from stractor.util import logger",
            "from google import genai",
        ]
    );
    assert_eq!(
        file.top_level_attributes,
        vec![r#"default_model = "deepseek-r1:8b""#]
    );
}

#[test]
fn test_top_level_functions() {
    let file = parse_fixture();
    assert_eq!(file.top_level_functions.len(), 2);

    // The tab-indented body line still belongs to the function
    assert_function(
        &file.top_level_functions[0],
        "get_auto_client",
        "model: str = default_model",
        None,
        Some("Get a client implementation based on the model name."),
        Some("pass"),
    );

    assert_function(
        &file.top_level_functions[1],
        "get_client",
        "model: str = default_model",
        Some("LLM"),
        Some("Get a client implementation based on the model name."),
        Some(
            "if model == \"default\":\n        return LLMOllama()\n    elif model.startswith(\"gemini\"):\n        return LLMGoogle(model)\n    else:\n        return LLMOllama()",
        ),
    );
}

#[test]
fn test_class_entity_and_methods() {
    let file = parse_fixture();
    assert_eq!(file.entities.len(), 1);

    let llm = &file.entities[0];
    assert_eq!(llm.name, "LLM");
    assert_eq!(llm.kind, EntityKind::Class);
    assert_eq!(llm.documentation.as_deref(), Some("Interface básica"));
    assert_eq!(llm.superclasses, None);
    assert_eq!(llm.methods.len(), 2);

    assert_function(
        &llm.methods[0],
        "chat_stream",
        "self, prompt, model_name=default_model, think=False",
        Some("str"),
        Some("Hello chat_stream"),
        Some("pass"),
    );

    assert_function(
        &llm.methods[1],
        "chat",
        "self, prompt, model_name=default_model, output=None, think=False",
        None,
        None,
        Some("print('lets chat')"),
    );
}

#[test]
fn test_counts() {
    let file = parse_fixture();
    assert_eq!(file.function_count(), 4);
    assert_eq!(file.method_count(), 2);
    assert_eq!(file.entity_count(), 1);
}

#[test]
fn test_parsing_is_idempotent() {
    let parser = PythonParser::new();
    let first = parser.parse(LLM_CLIENT).unwrap();
    let second = parser.parse(LLM_CLIENT).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_parse_file_sets_path() {
    let parser = PythonParser::new();
    let path = Path::new("tests/fixtures/llm_client.py");
    let file = parser.parse_file(path).unwrap();

    assert_eq!(file.path, path.display().to_string());
    assert_eq!(file.top_level_functions.len(), 2);
    assert_eq!(file.entity("LLM").map(|e| e.methods.len()), Some(2));
}

#[test]
fn test_json_output() {
    let file = parse_fixture();
    let json: serde_json::Value = serde_json::from_str(&file.to_json().unwrap()).unwrap();

    assert_eq!(json["documentation"], "top level docs");
    assert_eq!(json["entities"][0]["type"], "class");
    assert_eq!(json["entities"][0]["methods"][1]["return_type"], serde_json::Value::Null);
    assert_eq!(json["top_level_functions"][1]["return_type"], "LLM");

    let restored = SourceFile::from_json(&file.to_json_pretty().unwrap()).unwrap();
    assert_eq!(restored, file);
}

#[test]
fn test_source_order_is_preserved() {
    let source = r#"
def zeta():
    pass

class Beta:
    pass

def alpha():
    pass

class Alpha:
    pass
"#;
    let file = PythonParser::new().parse(source).unwrap();

    let functions: Vec<&str> = file
        .top_level_functions
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    let entities: Vec<&str> = file.entities.iter().map(|e| e.name.as_str()).collect();

    assert_eq!(functions, vec!["zeta", "alpha"]);
    assert_eq!(entities, vec!["Beta", "Alpha"]);
}

#[test]
fn test_unicode_text_is_verbatim() {
    let source = "\"\"\"Módulo de saudação 👋\"\"\"\nsaudação = \"olá\"\n\ndef cumprimentar(nome: str = \"ação\"):\n    return f\"olá {nome}\"\n";
    let file = PythonParser::new().parse(source).unwrap();

    assert_eq!(file.documentation.as_deref(), Some("Módulo de saudação 👋"));
    assert_eq!(file.top_level_attributes, vec!["saudação = \"olá\""]);

    let func = &file.top_level_functions[0];
    assert_eq!(func.name, "cumprimentar");
    assert_eq!(func.parameters, "nome: str = \"ação\"");
    assert_eq!(func.body.as_deref(), Some("return f\"olá {nome}\""));
}

#[test]
fn test_docstring_only_function_has_no_body() {
    let source = "def stub():\n    '''Not implemented yet.'''\n";
    let file = PythonParser::new().parse(source).unwrap();

    let stub = &file.top_level_functions[0];
    assert_eq!(stub.documentation.as_deref(), Some("Not implemented yet."));
    assert_eq!(stub.body, None);
}

#[test]
fn test_script_without_definitions() {
    let source = "#!/usr/bin/env python\nimport sys\n\nprint(sys.argv)\n";
    let file = PythonParser::new().parse(source).unwrap();

    assert_eq!(file.documentation, None);
    assert_eq!(file.imports, vec!["import sys"]);
    assert!(file.top_level_attributes.is_empty());
    assert!(file.top_level_functions.is_empty());
    assert!(file.entities.is_empty());
}
