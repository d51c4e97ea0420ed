use crate::error::{Result, SnipgenError};
use crate::templates::TemplateSet;
use inquire::Select;
use std::io::IsTerminal;

pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal()
}

/// Ask which template set to compile. Fails without a terminal instead of
/// blocking on a prompt nobody can answer.
pub fn select_template_set(interactive: bool) -> Result<TemplateSet> {
    if !interactive {
        return Err(SnipgenError::NonInteractive);
    }
    let set = Select::new(&t!("interactive.select_template_set"), TemplateSet::ALL.to_vec())
        .with_help_message(&t!("interactive.select_template_set_help"))
        .prompt()?;
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_template_set_non_interactive() {
        let result = select_template_set(false);
        assert!(matches!(result, Err(SnipgenError::NonInteractive)));
    }
}
