//! The per-entity form schemas
//!
//! One constructor per managed entity. These are the whole difference
//! between the fourteen pages as far as forms go; everything else is the
//! generic dialog plus [`crate::draft::Draft`].

use crate::schema::{
    DefaultValue, FieldFormat, FieldKind, FieldSpec, FormSchema, OptionSource,
};

// ============================================================================
// Static option tables
// ============================================================================

pub const BED_STATUSES: &[(&str, &str)] = &[
    ("AVAILABLE", "Available"),
    ("OCCUPIED", "Occupied"),
    ("MAINTENANCE", "Maintenance"),
];

pub const RESIDENT_STATUSES: &[(&str, &str)] = &[("ACTIVE", "Active"), ("LEFT", "Left")];

pub const FEE_STATUSES: &[(&str, &str)] = &[("UNPAID", "Unpaid"), ("PAID", "Paid")];

pub const PAYMENT_METHODS: &[(&str, &str)] = &[
    ("CASH", "Cash"),
    ("CARD", "Card"),
    ("ONLINE", "Online/UPI"),
];

pub const COMPLAINT_STATUSES: &[(&str, &str)] = &[
    ("PENDING", "Pending"),
    ("IN_PROGRESS", "In Progress"),
    ("RESOLVED", "Resolved"),
];

pub const LEAVE_STATUSES: &[(&str, &str)] = &[
    ("PENDING", "Pending"),
    ("APPROVED", "Approved"),
    ("REJECTED", "Rejected"),
];

pub const MENU_DAYS: &[(&str, &str)] = &[("WEEKDAY", "Weekday"), ("WEEKEND", "Weekend")];

pub const MEAL_TYPES: &[(&str, &str)] = &[
    ("BREAKFAST", "Breakfast"),
    ("LUNCH", "Lunch"),
    ("DINNER", "Dinner"),
];

pub const DAY_TYPES: &[(&str, &str)] = &[
    ("MONDAY", "Monday"),
    ("TUESDAY", "Tuesday"),
    ("WEDNESDAY", "Wednesday"),
    ("THURSDAY", "Thursday"),
    ("FRIDAY", "Friday"),
    ("SATURDAY", "Saturday"),
    ("SUNDAY", "Sunday"),
];

// ============================================================================
// Schemas
// ============================================================================

pub fn hostel_schema() -> FormSchema {
    FormSchema::new(
        "Hostel",
        vec![
            FieldSpec::new("name", "Name", FieldKind::Text).required(),
            FieldSpec::new("address", "Address", FieldKind::Text).required(),
            FieldSpec::new("phone", "Phone", FieldKind::Text).format(FieldFormat::Phone),
        ],
    )
}

pub fn floor_schema() -> FormSchema {
    FormSchema::new(
        "Floor",
        vec![
            FieldSpec::new("number", "Floor Number", FieldKind::Number { integer: true })
                .required(),
            FieldSpec::ref_select("hostelId", "Hostel", "hostels"),
        ],
    )
}

pub fn room_schema() -> FormSchema {
    FormSchema::new(
        "Room",
        vec![
            FieldSpec::new("roomNo", "Room No", FieldKind::Text).required(),
            FieldSpec::ref_select("hostelId", "Hostel", "hostels"),
            FieldSpec::new(
                "floorId",
                "Floor",
                FieldKind::Select {
                    source: OptionSource::Refs {
                        collection: "floors",
                        narrowed_by: Some("hostelId"),
                        only_tags: None,
                    },
                },
            )
            .required(),
        ],
    )
    .with_dependent("hostelId", "floorId")
}

pub fn bed_schema() -> FormSchema {
    FormSchema::new(
        "Bed",
        vec![
            FieldSpec::new("bedNo", "Bed No", FieldKind::Text).required(),
            FieldSpec::static_select("status", "Status", BED_STATUSES),
            FieldSpec::ref_select("hostelId", "Hostel", "hostels"),
            FieldSpec::new(
                "roomId",
                "Room",
                FieldKind::Select {
                    source: OptionSource::Refs {
                        collection: "rooms",
                        narrowed_by: Some("hostelId"),
                        only_tags: None,
                    },
                },
            )
            .required(),
        ],
    )
    .with_dependent("hostelId", "roomId")
}

pub fn resident_schema() -> FormSchema {
    FormSchema::new(
        "Resident",
        vec![
            FieldSpec::new("fullName", "Full Name", FieldKind::Text).required(),
            FieldSpec::new("phone", "Phone", FieldKind::Text)
                .required()
                .format(FieldFormat::Phone),
            FieldSpec::new("email", "Email", FieldKind::Text).format(FieldFormat::Email),
            FieldSpec::static_select("status", "Status", RESIDENT_STATUSES),
            FieldSpec::ref_select("hostelId", "Hostel", "hostels"),
            // Only vacant beds are offered, but the bed already assigned to
            // this resident stays selectable while editing
            FieldSpec::new(
                "bedId",
                "Bed",
                FieldKind::Select {
                    source: OptionSource::Refs {
                        collection: "beds",
                        narrowed_by: Some("hostelId"),
                        only_tags: Some(&["AVAILABLE"]),
                    },
                },
            ),
        ],
    )
    .with_dependent("hostelId", "bedId")
}

pub fn user_schema() -> FormSchema {
    FormSchema::new(
        "User",
        vec![
            FieldSpec::new("name", "Name", FieldKind::Text).required(),
            FieldSpec::new("email", "Email", FieldKind::Text)
                .required()
                .format(FieldFormat::Email),
            FieldSpec::new("role", "Role", FieldKind::Text).required(),
        ],
    )
}

pub fn staff_schema() -> FormSchema {
    FormSchema::new(
        "Staff",
        vec![
            FieldSpec::ref_select("userId", "User", "users"),
            FieldSpec::ref_select("hostelId", "Hostel", "hostels"),
            FieldSpec::new("role", "Role", FieldKind::Text).required(),
            FieldSpec::new("phone", "Phone", FieldKind::Text).format(FieldFormat::Phone),
        ],
    )
}

pub fn fee_schema() -> FormSchema {
    FormSchema::new(
        "Fee",
        vec![
            // The backend keys fees on (resident, month, year); retargeting
            // an existing fee at another resident is not offered
            FieldSpec::ref_select("residentId", "Resident", "residents").locked_on_edit(),
            FieldSpec::new("month", "Month", FieldKind::Number { integer: true }).required(),
            FieldSpec::new("year", "Year", FieldKind::Number { integer: true }).required(),
            FieldSpec::new("amount", "Amount", FieldKind::Number { integer: false }).required(),
            FieldSpec::static_select("status", "Status", FEE_STATUSES),
        ],
    )
}

pub fn payment_schema() -> FormSchema {
    FormSchema::new(
        "Payment",
        vec![
            FieldSpec::ref_select("residentId", "Resident", "residents"),
            FieldSpec::new(
                "feeId",
                "Fee Invoice",
                FieldKind::Select {
                    source: OptionSource::Refs {
                        collection: "fees",
                        narrowed_by: Some("residentId"),
                        only_tags: None,
                    },
                },
            )
            .required(),
            FieldSpec::new("amount", "Amount", FieldKind::Number { integer: false }).required(),
            FieldSpec::static_select("method", "Method", PAYMENT_METHODS),
            FieldSpec::new("paidAt", "Date", FieldKind::Date)
                .required()
                .default_value(DefaultValue::Today),
        ],
    )
    .with_dependent("residentId", "feeId")
}

pub fn complaint_schema() -> FormSchema {
    FormSchema::new(
        "Complaint",
        vec![
            FieldSpec::ref_select("residentId", "Resident", "residents"),
            FieldSpec::new("title", "Title", FieldKind::Text).required(),
            FieldSpec::new("description", "Description", FieldKind::TextArea).required(),
            FieldSpec::static_select("status", "Status", COMPLAINT_STATUSES),
        ],
    )
}

pub fn leave_schema() -> FormSchema {
    FormSchema::new(
        "Leave",
        vec![
            FieldSpec::ref_select("residentId", "Resident", "residents"),
            FieldSpec::new("fromDate", "From Date", FieldKind::Date).required(),
            FieldSpec::new("toDate", "To Date", FieldKind::Date).required(),
            FieldSpec::new("reason", "Reason", FieldKind::TextArea),
            FieldSpec::static_select("status", "Status", LEAVE_STATUSES),
        ],
    )
}

pub fn visitor_schema() -> FormSchema {
    FormSchema::new(
        "Visitor",
        vec![
            FieldSpec::ref_select("residentId", "Resident", "residents"),
            FieldSpec::new("name", "Name", FieldKind::Text).required(),
            FieldSpec::new("relation", "Relation", FieldKind::Text),
            FieldSpec::new("inTime", "In Time", FieldKind::DateTime)
                .required()
                .default_value(DefaultValue::Now),
            FieldSpec::new("outTime", "Out Time", FieldKind::DateTime),
        ],
    )
}

pub fn emergency_contact_schema() -> FormSchema {
    FormSchema::new(
        "Emergency Contact",
        vec![
            FieldSpec::ref_select("residentId", "Resident", "residents"),
            FieldSpec::new("name", "Full Name", FieldKind::Text).required(),
            FieldSpec::new("phone", "Phone", FieldKind::Text)
                .required()
                .format(FieldFormat::Phone),
            FieldSpec::new("relation", "Relation", FieldKind::Text),
        ],
    )
}

pub fn facility_schema() -> FormSchema {
    FormSchema::new(
        "Facility",
        vec![
            FieldSpec::ref_select("hostelId", "Hostel", "hostels"),
            FieldSpec::new("name", "Name", FieldKind::Text).required(),
            FieldSpec::new("description", "Description", FieldKind::TextArea),
            FieldSpec::new("startTime", "Start Time", FieldKind::Time),
            FieldSpec::new("endTime", "End Time", FieldKind::Time),
            FieldSpec::new("isActive", "Active", FieldKind::Toggle)
                .default_value(DefaultValue::Bool(true)),
        ],
    )
}

pub fn food_menu_schema() -> FormSchema {
    FormSchema::new(
        "Food Menu",
        vec![
            FieldSpec::ref_select("hostelId", "Hostel", "hostels"),
            FieldSpec::static_select("dayType", "Day", MENU_DAYS),
            FieldSpec::static_select("mealType", "Meal", MEAL_TYPES),
            FieldSpec::new("items", "Items", FieldKind::TextArea).required(),
            FieldSpec::new("startTime", "Start Time", FieldKind::Time)
                .default_value(DefaultValue::Text("08:00")),
            FieldSpec::new("endTime", "End Time", FieldKind::Time)
                .default_value(DefaultValue::Text("09:00")),
        ],
    )
}

pub fn hostel_timing_schema() -> FormSchema {
    FormSchema::new(
        "Hostel Timing",
        vec![
            FieldSpec::ref_select("hostelId", "Hostel", "hostels"),
            FieldSpec::static_select("dayType", "Day", DAY_TYPES),
            FieldSpec::new("inTime", "In Time", FieldKind::Time).required(),
            FieldSpec::new("outTime", "Out Time", FieldKind::Time).required(),
        ],
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_schema_has_fields() {
        let schemas = [
            hostel_schema(),
            floor_schema(),
            room_schema(),
            bed_schema(),
            resident_schema(),
            user_schema(),
            staff_schema(),
            fee_schema(),
            payment_schema(),
            complaint_schema(),
            leave_schema(),
            visitor_schema(),
            emergency_contact_schema(),
            facility_schema(),
            hostel_timing_schema(),
            food_menu_schema(),
        ];
        for schema in &schemas {
            assert!(!schema.fields.is_empty(), "{} has no fields", schema.label);
        }
    }

    #[test]
    fn test_dependent_pairs_reference_real_fields() {
        for schema in [
            room_schema(),
            bed_schema(),
            resident_schema(),
            payment_schema(),
        ] {
            for rule in &schema.dependents {
                assert!(
                    schema.field(rule.governing).is_some(),
                    "{}: unknown governing field {}",
                    schema.label,
                    rule.governing
                );
                assert!(
                    schema.field(rule.dependent).is_some(),
                    "{}: unknown dependent field {}",
                    schema.label,
                    rule.dependent
                );
            }
        }
    }

    #[test]
    fn test_fee_resident_locked_on_edit() {
        let schema = fee_schema();
        assert!(schema.field("residentId").unwrap().locked_on_edit);
        assert!(!schema.field("amount").unwrap().locked_on_edit);
    }

    #[test]
    fn test_resident_bed_select_restricts_to_vacant() {
        let schema = resident_schema();
        let bed = schema.field("bedId").unwrap();
        match &bed.kind {
            FieldKind::Select {
                source:
                    OptionSource::Refs {
                        collection,
                        narrowed_by,
                        only_tags,
                    },
            } => {
                assert_eq!(*collection, "beds");
                assert_eq!(*narrowed_by, Some("hostelId"));
                assert_eq!(*only_tags, Some(&["AVAILABLE"][..]));
            }
            other => panic!("expected a refs select, got {other:?}"),
        }
        assert!(!bed.required, "a resident can exist without a bed");
    }
}
