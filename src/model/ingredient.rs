use std::fmt;

/// A measured amount of one food item inside a [`Recipe`](crate::model::Recipe).
///
/// Values are taken as entered: zero or negative quantities and calories
/// are accepted without complaint.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub calories_per_unit: i32,
    /// Free-text classification (e.g. "Grain"), not checked against any list.
    pub food_group: String,
}

impl Ingredient {
    /// Creates a new Ingredient.
    ///
    /// # Arguments
    /// * `name` - Food item name
    /// * `quantity` - Amount, in `unit`s
    /// * `unit` - Unit label (e.g. "slices", "g")
    /// * `calories_per_unit` - Calories contributed by one unit
    /// * `food_group` - Classification tag
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        calories_per_unit: i32,
        food_group: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            calories_per_unit,
            food_group: food_group.into(),
        }
    }

    /// Calories contributed by this ingredient (`calories_per_unit * quantity`).
    pub fn calories(&self) -> f64 {
        f64::from(self.calories_per_unit) * self.quantity
    }
}

/// Renders as `<quantity> <unit> of <name>`.
impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} of {}", self.quantity, self.unit, self.name)
    }
}
