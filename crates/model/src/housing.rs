//! Housing records: hostels, floors, rooms, and beds
//!
//! These four entities form the containment chain the rest of the system
//! hangs off: a hostel has floors, a floor has rooms, a room has beds, and
//! a bed may be occupied by a resident. Read responses denormalize the
//! chain into embedded snapshots (`Bed.room.roomNo`, `Bed.hostel.name`)
//! so list pages never need client-side joins for display.

use hosteldesk_core::{DeskError, DeskResult, RecordId, RefOption, Resource, Validatable};
use serde::{Deserialize, Serialize};

use crate::people::ResidentBrief;

// ============================================================================
// Hostel
// ============================================================================

/// A hostel building
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hostel {
    pub id: RecordId,
    pub name: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Resource for Hostel {
    const PATH: &'static str = "hostels";
    const LABEL: &'static str = "Hostel";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_text(&self) -> String {
        self.name.clone()
    }

    fn ref_option(&self) -> RefOption {
        RefOption::new(self.id.clone(), self.name.clone())
    }
}

impl Validatable for Hostel {
    fn validate(&self) -> DeskResult<()> {
        if self.name.trim().is_empty() {
            return Err(DeskError::missing_field("Name"));
        }
        if self.address.trim().is_empty() {
            return Err(DeskError::missing_field("Address"));
        }
        Ok(())
    }
}

/// Embedded hostel snapshot on records that reference one
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostelBrief {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
}

// ============================================================================
// Floor
// ============================================================================

/// A floor inside a hostel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    pub id: RecordId,
    pub number: i32,
    pub hostel_id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostel: Option<HostelBrief>,
}

impl Floor {
    /// Display label used in dropdowns and cards
    pub fn display(&self) -> String {
        format!("Floor {}", self.number)
    }
}

impl Resource for Floor {
    const PATH: &'static str = "floors";
    const LABEL: &'static str = "Floor";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_text(&self) -> String {
        self.number.to_string()
    }

    fn foreign_key(&self, field: &str) -> Option<&RecordId> {
        match field {
            "hostelId" => Some(&self.hostel_id),
            _ => None,
        }
    }

    fn ref_option(&self) -> RefOption {
        RefOption::new(self.id.clone(), self.display()).with_group(self.hostel_id.clone())
    }
}

impl Validatable for Floor {
    fn validate(&self) -> DeskResult<()> {
        if self.hostel_id.is_empty() {
            return Err(DeskError::missing_field("Hostel"));
        }
        if self.number < 0 {
            return Err(DeskError::field_format("Floor", "must not be negative"));
        }
        Ok(())
    }
}

/// Embedded floor snapshot
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorBrief {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub number: i32,
}

// ============================================================================
// Room
// ============================================================================

/// A room on a floor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: RecordId,
    pub room_no: String,
    pub hostel_id: RecordId,
    pub floor_id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostel: Option<HostelBrief>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<FloorBrief>,
}

impl Resource for Room {
    const PATH: &'static str = "rooms";
    const LABEL: &'static str = "Room";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_text(&self) -> String {
        self.room_no.clone()
    }

    fn foreign_key(&self, field: &str) -> Option<&RecordId> {
        match field {
            "hostelId" => Some(&self.hostel_id),
            "floorId" => Some(&self.floor_id),
            _ => None,
        }
    }

    fn ref_option(&self) -> RefOption {
        RefOption::new(self.id.clone(), self.room_no.clone()).with_group(self.hostel_id.clone())
    }
}

impl Validatable for Room {
    fn validate(&self) -> DeskResult<()> {
        if self.room_no.trim().is_empty() {
            return Err(DeskError::missing_field("Room No"));
        }
        if self.hostel_id.is_empty() {
            return Err(DeskError::missing_field("Hostel"));
        }
        if self.floor_id.is_empty() {
            return Err(DeskError::missing_field("Floor"));
        }
        Ok(())
    }
}

/// Embedded room snapshot
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomBrief {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub room_no: String,
}

// ============================================================================
// Bed
// ============================================================================

/// Occupancy state of a bed.
///
/// The backend keeps this in sync with resident assignment; the client
/// treats it as read-mostly display state plus a form select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BedStatus {
    #[default]
    Available,
    Occupied,
    Maintenance,
}

impl BedStatus {
    /// All variants, in form-select order
    pub const ALL: [BedStatus; 3] = [
        BedStatus::Available,
        BedStatus::Occupied,
        BedStatus::Maintenance,
    ];

    /// The wire / display string
    pub fn as_str(&self) -> &'static str {
        match self {
            BedStatus::Available => "AVAILABLE",
            BedStatus::Occupied => "OCCUPIED",
            BedStatus::Maintenance => "MAINTENANCE",
        }
    }
}

impl std::fmt::Display for BedStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bed inside a room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bed {
    pub id: RecordId,
    pub bed_no: String,
    #[serde(default)]
    pub status: BedStatus,
    pub hostel_id: RecordId,
    pub room_id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<RoomBrief>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostel: Option<HostelBrief>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resident: Option<ResidentBrief>,
}

impl Resource for Bed {
    const PATH: &'static str = "beds";
    const LABEL: &'static str = "Bed";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_text(&self) -> String {
        self.bed_no.clone()
    }

    fn foreign_key(&self, field: &str) -> Option<&RecordId> {
        match field {
            "hostelId" => Some(&self.hostel_id),
            "roomId" => Some(&self.room_id),
            _ => None,
        }
    }

    fn ref_option(&self) -> RefOption {
        RefOption::new(self.id.clone(), self.bed_no.clone())
            .with_group(self.hostel_id.clone())
            .with_tag(self.status.as_str())
    }
}

impl Validatable for Bed {
    fn validate(&self) -> DeskResult<()> {
        if self.bed_no.trim().is_empty() {
            return Err(DeskError::missing_field("Bed No"));
        }
        if self.hostel_id.is_empty() {
            return Err(DeskError::missing_field("Hostel"));
        }
        if self.room_id.is_empty() {
            return Err(DeskError::missing_field("Room"));
        }
        Ok(())
    }
}

/// Embedded bed snapshot
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BedBrief {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub bed_no: String,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bed_decodes_embedded_relations() {
        let json = r#"{
            "id": "bed-1",
            "bedNo": "B-101",
            "status": "OCCUPIED",
            "hostelId": "h-1",
            "roomId": "r-1",
            "room": { "id": "r-1", "roomNo": "101" },
            "hostel": { "id": "h-1", "name": "Sunrise" },
            "resident": { "id": "res-1", "fullName": "Asha Rao" }
        }"#;
        let bed: Bed = serde_json::from_str(json).unwrap();
        assert_eq!(bed.status, BedStatus::Occupied);
        assert_eq!(bed.room.as_ref().unwrap().room_no, "101");
        assert_eq!(bed.hostel.as_ref().unwrap().name, "Sunrise");
        assert_eq!(bed.resident.as_ref().unwrap().full_name, "Asha Rao");
    }

    #[test]
    fn test_bed_decodes_without_embeds() {
        let json = r#"{"id":"b","bedNo":"B-1","hostelId":"h","roomId":"r"}"#;
        let bed: Bed = serde_json::from_str(json).unwrap();
        assert_eq!(bed.status, BedStatus::Available);
        assert!(bed.room.is_none());
        assert!(bed.resident.is_none());
    }

    #[test]
    fn test_bed_ref_option_carries_group_and_status() {
        let bed = Bed {
            id: RecordId::new("b1"),
            bed_no: "B-2".into(),
            status: BedStatus::Maintenance,
            hostel_id: RecordId::new("h1"),
            room_id: RecordId::new("r1"),
            room: None,
            hostel: None,
            resident: None,
        };
        let opt = bed.ref_option();
        assert_eq!(opt.group, Some(RecordId::new("h1")));
        assert_eq!(opt.tag.as_deref(), Some("MAINTENANCE"));
    }

    #[test]
    fn test_hostel_validation() {
        let mut hostel = Hostel {
            id: RecordId::default(),
            name: "Sunrise".into(),
            address: "12 Lake Rd".into(),
            phone: None,
        };
        assert!(hostel.is_valid());

        hostel.address.clear();
        assert_eq!(hostel.validation_errors(), vec!["'Address' is required"]);
    }

    #[test]
    fn test_floor_display_and_fk() {
        let floor = Floor {
            id: RecordId::new("f1"),
            number: 3,
            hostel_id: RecordId::new("h1"),
            hostel: None,
        };
        assert_eq!(floor.display(), "Floor 3");
        assert_eq!(floor.foreign_key("hostelId"), Some(&RecordId::new("h1")));
        assert_eq!(floor.foreign_key("roomId"), None);
    }

    #[test]
    fn test_room_serializes_camel_case() {
        let room = Room {
            id: RecordId::new("r1"),
            room_no: "204".into(),
            hostel_id: RecordId::new("h1"),
            floor_id: RecordId::new("f2"),
            hostel: None,
            floor: None,
        };
        let json = serde_json::to_value(&room).unwrap();
        assert_eq!(json["roomNo"], "204");
        assert_eq!(json["floorId"], "f2");
    }
}
