use riagen::CodeGeneratorMetadata;
use riagen_derive::CodeGenerator;

#[derive(CodeGenerator)]
#[code_generator(name = "CSharpGenerator", language = "C#")]
struct CSharp;

/// Without a `name`, the type identifier is used.
#[derive(CodeGenerator)]
#[code_generator(language = "VB")]
struct VisualBasicGenerator {
    #[allow(dead_code)]
    line_width: usize,
}

#[derive(CodeGenerator)]
#[code_generator(name = "Typed", language = "F#")]
struct TypedGenerator<T> {
    #[allow(dead_code)]
    options: T,
}

#[test]
fn test_generator_metadata() {
    assert_eq!(CSharp.generator_name(), "CSharpGenerator");
    assert_eq!(CSharp.language(), "C#");
    assert_eq!(CSharp.describe(), "CSharpGenerator (C#)");
}

#[test]
fn test_generator_name_defaults_to_ident() {
    let generator = VisualBasicGenerator { line_width: 100 };
    assert_eq!(generator.generator_name(), "VisualBasicGenerator");
    assert_eq!(generator.language(), "VB");
}

#[test]
fn test_generic_generator_as_trait_object() {
    let generators: Vec<Box<dyn CodeGeneratorMetadata>> =
        vec![Box::new(CSharp), Box::new(TypedGenerator { options: () })];

    let described: Vec<String> = generators.iter().map(|g| g.describe()).collect();
    assert_eq!(described, ["CSharpGenerator (C#)", "Typed (F#)"]);
}
