/// Metadata every code generator exposes so the build pipeline can pick one by name and
/// language.
///
/// Usually implemented with `#[derive(CodeGenerator)]` from `riagen-derive`.
pub trait CodeGeneratorMetadata {
    /// The name used to select this generator.
    fn generator_name(&self) -> &'static str;

    /// The language of the emitted code, e.g. `C#`.
    fn language(&self) -> &'static str;

    /// A human readable `<name> (<language>)` label.
    fn describe(&self) -> String {
        format!("{} ({})", self.generator_name(), self.language())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct VisualBasic;

    impl CodeGeneratorMetadata for VisualBasic {
        fn generator_name(&self) -> &'static str {
            "VisualBasicGenerator"
        }

        fn language(&self) -> &'static str {
            "VB"
        }
    }

    #[test]
    fn test_describe() {
        let generators: Vec<Box<dyn CodeGeneratorMetadata>> = vec![Box::new(VisualBasic)];
        assert_eq!(generators[0].describe(), "VisualBasicGenerator (VB)");
    }
}
