//! Amenity records: facilities, food menus, and gate timings
//!
//! All three are hostel-scoped. Times of day travel as plain `"HH:MM"`
//! strings, exactly as the forms submit them; the backend never normalizes
//! them, so neither do we.

use hosteldesk_core::{DeskError, DeskResult, RecordId, RefOption, Resource, Validatable};
use serde::{Deserialize, Serialize};

use crate::housing::HostelBrief;

// ============================================================================
// Facility
// ============================================================================

/// A bookable or scheduled amenity (gym, laundry, wifi, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub id: RecordId,
    pub hostel_id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostel: Option<HostelBrief>,
}

fn default_true() -> bool {
    true
}

impl Resource for Facility {
    const PATH: &'static str = "facilities";
    const LABEL: &'static str = "Facility";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_text(&self) -> String {
        self.name.clone()
    }

    fn foreign_key(&self, field: &str) -> Option<&RecordId> {
        match field {
            "hostelId" => Some(&self.hostel_id),
            _ => None,
        }
    }

    fn ref_option(&self) -> RefOption {
        RefOption::new(self.id.clone(), self.name.clone()).with_group(self.hostel_id.clone())
    }
}

impl Validatable for Facility {
    fn validate(&self) -> DeskResult<()> {
        if self.hostel_id.is_empty() {
            return Err(DeskError::missing_field("Hostel"));
        }
        if self.name.trim().is_empty() {
            return Err(DeskError::missing_field("Name"));
        }
        Ok(())
    }
}

// ============================================================================
// Food Menu
// ============================================================================

/// Which part of the week a menu applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MenuDay {
    #[default]
    Weekday,
    Weekend,
}

impl MenuDay {
    pub const ALL: [MenuDay; 2] = [MenuDay::Weekday, MenuDay::Weekend];

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuDay::Weekday => "WEEKDAY",
            MenuDay::Weekend => "WEEKEND",
        }
    }

    /// Map a calendar day name (`"SATURDAY"`) to its menu bucket
    pub fn from_weekday_name(day: &str) -> MenuDay {
        match day {
            "SATURDAY" | "SUNDAY" => MenuDay::Weekend,
            _ => MenuDay::Weekday,
        }
    }
}

impl std::fmt::Display for MenuDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A meal slot within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MealType {
    #[default]
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    pub const ALL: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "BREAKFAST",
            MealType::Lunch => "LUNCH",
            MealType::Dinner => "DINNER",
        }
    }
}

impl std::fmt::Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One meal slot's menu for a hostel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodMenu {
    pub id: RecordId,
    pub hostel_id: RecordId,
    #[serde(default)]
    pub day_type: MenuDay,
    #[serde(default)]
    pub meal_type: MealType,
    #[serde(default)]
    pub items: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostel: Option<HostelBrief>,
}

impl FoodMenu {
    /// Whether this menu fills the given slot
    pub fn fills(&self, day: MenuDay, meal: MealType) -> bool {
        self.day_type == day && self.meal_type == meal
    }
}

impl Resource for FoodMenu {
    const PATH: &'static str = "food-menus";
    const LABEL: &'static str = "Food Menu";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_text(&self) -> String {
        self.items.clone()
    }

    fn foreign_key(&self, field: &str) -> Option<&RecordId> {
        match field {
            "hostelId" => Some(&self.hostel_id),
            _ => None,
        }
    }

    fn ref_option(&self) -> RefOption {
        RefOption::new(
            self.id.clone(),
            format!("{} {}", self.day_type, self.meal_type),
        )
        .with_group(self.hostel_id.clone())
    }
}

impl Validatable for FoodMenu {
    fn validate(&self) -> DeskResult<()> {
        if self.hostel_id.is_empty() {
            return Err(DeskError::missing_field("Hostel"));
        }
        if self.items.trim().is_empty() {
            return Err(DeskError::missing_field("Items"));
        }
        Ok(())
    }
}

// ============================================================================
// Hostel Timing
// ============================================================================

/// Day a gate-timing rule applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayType {
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayType {
    pub const ALL: [DayType; 7] = [
        DayType::Monday,
        DayType::Tuesday,
        DayType::Wednesday,
        DayType::Thursday,
        DayType::Friday,
        DayType::Saturday,
        DayType::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayType::Monday => "MONDAY",
            DayType::Tuesday => "TUESDAY",
            DayType::Wednesday => "WEDNESDAY",
            DayType::Thursday => "THURSDAY",
            DayType::Friday => "FRIDAY",
            DayType::Saturday => "SATURDAY",
            DayType::Sunday => "SUNDAY",
        }
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gate in/out timing for one day of the week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostelTiming {
    pub id: RecordId,
    pub hostel_id: RecordId,
    #[serde(default)]
    pub day_type: DayType,
    #[serde(default)]
    pub in_time: String,
    #[serde(default)]
    pub out_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostel: Option<HostelBrief>,
}

impl Resource for HostelTiming {
    const PATH: &'static str = "hostel-timings";
    const LABEL: &'static str = "Hostel Timing";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_text(&self) -> String {
        self.day_type.to_string()
    }

    fn foreign_key(&self, field: &str) -> Option<&RecordId> {
        match field {
            "hostelId" => Some(&self.hostel_id),
            _ => None,
        }
    }

    fn ref_option(&self) -> RefOption {
        RefOption::new(self.id.clone(), self.day_type.to_string())
            .with_group(self.hostel_id.clone())
    }
}

impl Validatable for HostelTiming {
    fn validate(&self) -> DeskResult<()> {
        if self.hostel_id.is_empty() {
            return Err(DeskError::missing_field("Hostel"));
        }
        if self.in_time.trim().is_empty() {
            return Err(DeskError::missing_field("In Time"));
        }
        if self.out_time.trim().is_empty() {
            return Err(DeskError::missing_field("Out Time"));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_menu_day_bucketing() {
        assert_eq!(MenuDay::from_weekday_name("MONDAY"), MenuDay::Weekday);
        assert_eq!(MenuDay::from_weekday_name("FRIDAY"), MenuDay::Weekday);
        assert_eq!(MenuDay::from_weekday_name("SATURDAY"), MenuDay::Weekend);
        assert_eq!(MenuDay::from_weekday_name("SUNDAY"), MenuDay::Weekend);
    }

    #[test]
    fn test_food_menu_slot_lookup() {
        let menu: FoodMenu = serde_json::from_str(
            r#"{"id":"m","hostelId":"h","dayType":"WEEKEND","mealType":"LUNCH",
                "items":"Rice, dal","startTime":"12:30","endTime":"14:00"}"#,
        )
        .unwrap();
        assert!(menu.fills(MenuDay::Weekend, MealType::Lunch));
        assert!(!menu.fills(MenuDay::Weekday, MealType::Lunch));
        assert!(!menu.fills(MenuDay::Weekend, MealType::Dinner));
    }

    #[test]
    fn test_facility_defaults_active() {
        let f: Facility =
            serde_json::from_str(r#"{"id":"f","hostelId":"h","name":"Gym"}"#).unwrap();
        assert!(f.is_active);
        assert!(f.is_valid());
    }

    #[test]
    fn test_timing_requires_both_times() {
        let t: HostelTiming = serde_json::from_str(
            r#"{"id":"t","hostelId":"h","dayType":"SUNDAY","inTime":"21:00","outTime":""}"#,
        )
        .unwrap();
        assert_eq!(t.validation_errors(), vec!["'Out Time' is required"]);
        assert_eq!(t.search_text(), "SUNDAY");
    }
}
