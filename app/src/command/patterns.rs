use prostruct_extract::CATALOG;

/// Strategy listing the extraction pattern catalog.
///
/// # Design
/// - Static dispatch: All method calls are monomorphized
/// - Stateless: No internal state
#[derive(Debug, Clone, Copy)]
pub struct PatternsStrategy;

impl super::CommandStrategy for PatternsStrategy {
    type Input = ();

    fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let id_width = CATALOG.iter().map(|def| def.id.len()).max().unwrap_or(0);
        let field_width = CATALOG.iter().map(|def| def.field.len()).max().unwrap_or(0);

        for def in CATALOG {
            println!(
                "{:<id_width$}  {:<field_width$}  {}",
                def.id, def.field, def.pattern
            );
        }
        Ok(())
    }
}
