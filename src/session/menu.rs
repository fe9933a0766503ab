/// Menu printed before every choice.
pub const MENU: &str = "\nOptions:\n\
                        1. Add Recipe\n\
                        2. Display Recipes\n\
                        3. View Recipe Details\n\
                        4. Exit\n\
                        Enter your choice: ";

/// A menu answer, decoded once from the raw input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    AddRecipe,
    Display,
    View,
    Exit,
    /// Anything else, kept verbatim for logging.
    Invalid(String),
}

impl MenuChoice {
    /// Decodes a line with its terminator already removed.
    ///
    /// Matching is exact: `" 1"` or `"1."` are invalid.
    pub fn from_input(input: &str) -> Self {
        match input {
            "1" => MenuChoice::AddRecipe,
            "2" => MenuChoice::Display,
            "3" => MenuChoice::View,
            "4" => MenuChoice::Exit,
            other => MenuChoice::Invalid(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_known_choices() {
        assert_eq!(MenuChoice::from_input("1"), MenuChoice::AddRecipe);
        assert_eq!(MenuChoice::from_input("2"), MenuChoice::Display);
        assert_eq!(MenuChoice::from_input("3"), MenuChoice::View);
        assert_eq!(MenuChoice::from_input("4"), MenuChoice::Exit);
    }

    #[test]
    fn test_decode_anything_else_as_invalid() {
        for input in ["", "5", "exit", " 1", "01"] {
            assert_eq!(
                MenuChoice::from_input(input),
                MenuChoice::Invalid(input.to_string())
            );
        }
    }

    #[test]
    fn test_menu_lists_four_options() {
        assert!(MENU.contains("1. Add Recipe\n2. Display Recipes\n3. View Recipe Details\n4. Exit\n"));
        assert!(MENU.ends_with("Enter your choice: "));
    }
}
