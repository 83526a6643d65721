//! End-to-end queries over a realistic single-file model, the way the
//! renderer would drive them: parser output in, selection plus the
//! reflection and path decisions out.

use gostub_model::{
    Field, Function, Header, Import, SourceInfo, SourcePath, TypeExpr,
};
use pretty_assertions::assert_eq;
use regex::Regex;

/// The model a parser would produce for a small key-value store file:
///
/// ```go
/// package store
///
/// func init() {}
/// func New(capacity int) *Store
/// func (s *Store) Get(key string) (string, error)
/// func (s *Store) Put(key string, value string) error
/// func (s *Store) Len() int
/// func (s *Store) keys() []string
/// ```
fn store_file() -> SourceInfo {
    let receiver = |name: &str| {
        Some(Field {
            name: name.to_string(),
            typ: TypeExpr::named("Store").with_star(),
            index: 0,
        })
    };
    let param = |name: &str, typ: TypeExpr, index: usize| Field {
        name: name.to_string(),
        typ,
        index,
    };

    SourceInfo {
        header: Header {
            package: "store".to_string(),
            imports: vec![
                Import {
                    name: None,
                    path: "sync".to_string(),
                },
                Import {
                    name: Some("xerrors".to_string()),
                    path: "golang.org/x/xerrors".to_string(),
                },
            ],
            code: Vec::new(),
        },
        funcs: vec![
            Function {
                name: "init".to_string(),
                is_exported: false,
                receiver: None,
                parameters: Vec::new(),
                results: Vec::new(),
                returns_error: false,
            },
            Function {
                name: "New".to_string(),
                is_exported: true,
                receiver: None,
                parameters: vec![param("capacity", TypeExpr::named("int"), 0)],
                results: vec![param("", TypeExpr::named("Store").with_star(), 0)],
                returns_error: false,
            },
            Function {
                name: "Get".to_string(),
                is_exported: true,
                receiver: receiver("s"),
                parameters: vec![param("key", TypeExpr::named("string"), 0)],
                results: vec![param("", TypeExpr::named("string"), 0)],
                returns_error: true,
            },
            Function {
                name: "Put".to_string(),
                is_exported: true,
                receiver: receiver("s"),
                parameters: vec![
                    param("key", TypeExpr::named("string"), 0),
                    param("value", TypeExpr::named("string"), 1),
                ],
                results: Vec::new(),
                returns_error: true,
            },
            Function {
                name: "Len".to_string(),
                is_exported: true,
                receiver: receiver("s"),
                parameters: Vec::new(),
                results: vec![param("", TypeExpr::named("int"), 0)],
                returns_error: false,
            },
            Function {
                name: "keys".to_string(),
                is_exported: false,
                receiver: receiver("s"),
                parameters: Vec::new(),
                results: vec![param("", TypeExpr::named("[]string"), 0)],
                returns_error: false,
            },
        ],
    }
}

fn names(funcs: &[&Function]) -> Vec<String> {
    funcs.iter().map(|f| f.name.clone()).collect()
}

#[test]
fn test_parser_shaped_model_validates() {
    assert_eq!(store_file().validate(), Ok(()));
}

#[test]
fn test_selection_without_filters_drops_only_the_empty_signature() {
    let info = store_file();
    let selected = info.testable_funcs(None, None, &[]);
    assert_eq!(names(&selected), ["New", "Get", "Put", "Len", "keys"]);
}

#[test]
fn test_selection_skips_functions_with_existing_tests() {
    let info = store_file();
    // Matches the derived names, receiver type included.
    let tested = vec!["TestStoreGet".to_string(), "TestNew".to_string()];
    let selected = info.testable_funcs(None, None, &tested);
    assert_eq!(names(&selected), ["Put", "Len", "keys"]);
}

#[test]
fn test_selection_with_both_filters() {
    let info = store_file();
    let only = Regex::new("^(Get|Put|Len)$").unwrap();
    let excl = Regex::new("^Put").unwrap();
    let selected = info.testable_funcs(Some(&only), Some(&excl), &[]);
    assert_eq!(names(&selected), ["Get", "Len"]);
}

#[test]
fn test_derived_test_names() {
    let info = store_file();
    let derived: Vec<String> = info.funcs.iter().map(Function::test_name).collect();
    assert_eq!(
        derived,
        [
            "TestInit",
            "TestNew",
            "TestStoreGet",
            "TestStorePut",
            "TestStoreLen",
            "TestStoreKeys",
        ]
    );
}

#[test]
fn test_store_file_needs_reflection() {
    // New returns *Store and keys returns []string.
    assert!(store_file().uses_reflection());
}

#[test]
fn test_basic_only_results_need_no_reflection() {
    let mut info = store_file();
    info.funcs.retain(|f| ["Get", "Put", "Len"].contains(&f.name.as_str()));
    assert!(!info.uses_reflection());
}

#[test]
fn test_destination_path_for_the_analyzed_file() {
    let path = SourcePath::new("internal/store/store.go");
    assert_eq!(path.test_path().as_str(), "internal/store/store_test.go");
    assert_eq!(path.test_path().test_path(), path.test_path());
}

#[test]
fn test_model_round_trips_through_serde() {
    let info = store_file();
    let json = serde_json::to_string(&info).unwrap();
    let back: SourceInfo = serde_json::from_str(&json).unwrap();
    assert_eq!(back, info);
}
