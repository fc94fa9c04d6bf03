//! Page descriptors
//!
//! One [`PageDescriptor`] per managed entity: which collection to load,
//! which reference collections to load alongside it, what the table
//! shows, what the search box matches, and which form schema the dialog
//! uses. The UI's single resource page is instantiated from these.

use crate::catalog;
use crate::schema::FormSchema;

// ============================================================================
// Page Kind
// ============================================================================

/// Every entity page the console offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Hostels,
    Floors,
    Rooms,
    Beds,
    Residents,
    Staff,
    Users,
    Fees,
    Payments,
    Complaints,
    Leaves,
    Visitors,
    EmergencyContacts,
    Facilities,
    FoodMenus,
    HostelTimings,
}

impl PageKind {
    /// All pages, in sidebar order
    pub const ALL: [PageKind; 16] = [
        PageKind::Hostels,
        PageKind::Floors,
        PageKind::Rooms,
        PageKind::Beds,
        PageKind::Residents,
        PageKind::Staff,
        PageKind::Users,
        PageKind::Fees,
        PageKind::Payments,
        PageKind::Complaints,
        PageKind::Leaves,
        PageKind::Visitors,
        PageKind::EmergencyContacts,
        PageKind::Facilities,
        PageKind::FoodMenus,
        PageKind::HostelTimings,
    ];
}

// ============================================================================
// Descriptor
// ============================================================================

/// A table column: dotted row path plus header label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
}

impl Column {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Everything page-specific about one entity page
#[derive(Debug, Clone, PartialEq)]
pub struct PageDescriptor {
    pub kind: PageKind,
    /// Page heading and sidebar entry
    pub title: &'static str,
    pub icon: &'static str,
    /// Primary collection path
    pub collection: &'static str,
    /// Reference collections loaded concurrently with the primary list
    pub refs: &'static [&'static str],
    /// Dotted row path the free-text search matches
    pub search_key: &'static str,
    pub search_placeholder: &'static str,
    /// Launch parameters accepted as foreign-key filters (`hostelId`)
    pub fk_params: &'static [&'static str],
    pub columns: &'static [Column],
    /// Form schema constructor for the create/edit dialog
    pub schema: fn() -> FormSchema,
    /// Whether the page offers the CSV export action
    pub exportable: bool,
}

/// The descriptor for a page
pub fn descriptor(kind: PageKind) -> PageDescriptor {
    match kind {
        PageKind::Hostels => PageDescriptor {
            kind,
            title: "Hostels",
            icon: "🏢",
            collection: "hostels",
            refs: &[],
            search_key: "name",
            search_placeholder: "Search hostel...",
            fk_params: &[],
            columns: {const COLS: &[Column] = &[
                Column::new("name", "Name"),
                Column::new("address", "Address"),
                Column::new("phone", "Phone"),
            ]; COLS},
            schema: catalog::hostel_schema,
            exportable: false,
        },
        PageKind::Floors => PageDescriptor {
            kind,
            title: "Floors",
            icon: "🧱",
            collection: "floors",
            refs: &["hostels"],
            search_key: "number",
            search_placeholder: "Search floor...",
            fk_params: &["hostelId"],
            columns: {const COLS: &[Column] = &[
                Column::new("number", "Floor"),
                Column::new("hostel.name", "Hostel"),
            ]; COLS},
            schema: catalog::floor_schema,
            exportable: false,
        },
        PageKind::Rooms => PageDescriptor {
            kind,
            title: "Rooms",
            icon: "🚪",
            collection: "rooms",
            refs: &["hostels", "floors"],
            search_key: "roomNo",
            search_placeholder: "Search room...",
            fk_params: &["hostelId"],
            columns: {const COLS: &[Column] = &[
                Column::new("roomNo", "Room No"),
                Column::new("hostel.name", "Hostel"),
                Column::new("floor.number", "Floor"),
            ]; COLS},
            schema: catalog::room_schema,
            exportable: false,
        },
        PageKind::Beds => PageDescriptor {
            kind,
            title: "Bed Inventory",
            icon: "🛏️",
            collection: "beds",
            refs: &["hostels", "rooms"],
            search_key: "bedNo",
            search_placeholder: "Search bed...",
            fk_params: &["roomId", "hostelId"],
            columns: {const COLS: &[Column] = &[
                Column::new("bedNo", "Bed No"),
                Column::new("room.roomNo", "Room"),
                Column::new("hostel.name", "Hostel"),
                Column::new("status", "Status"),
            ]; COLS},
            schema: catalog::bed_schema,
            exportable: false,
        },
        PageKind::Residents => PageDescriptor {
            kind,
            title: "Residents",
            icon: "🧑",
            collection: "residents",
            refs: &["hostels", "beds"],
            search_key: "fullName",
            search_placeholder: "Search resident...",
            fk_params: &["hostelId"],
            columns: {const COLS: &[Column] = &[
                Column::new("fullName", "Full Name"),
                Column::new("phone", "Phone"),
                Column::new("email", "Email"),
                Column::new("hostel.name", "Hostel"),
                Column::new("bed.bedNo", "Bed"),
                Column::new("status", "Status"),
            ]; COLS},
            schema: catalog::resident_schema,
            exportable: false,
        },
        PageKind::Staff => PageDescriptor {
            kind,
            title: "Staff",
            icon: "🪪",
            collection: "staff",
            refs: &["users", "hostels"],
            search_key: "user.name",
            search_placeholder: "Search staff...",
            fk_params: &["hostelId"],
            columns: {const COLS: &[Column] = &[
                Column::new("user.name", "Name"),
                Column::new("role", "Role"),
                Column::new("phone", "Phone"),
                Column::new("hostel.name", "Hostel"),
            ]; COLS},
            schema: catalog::staff_schema,
            exportable: false,
        },
        PageKind::Users => PageDescriptor {
            kind,
            title: "Users",
            icon: "👥",
            collection: "users",
            refs: &[],
            search_key: "name",
            search_placeholder: "Search user...",
            fk_params: &[],
            columns: {const COLS: &[Column] = &[
                Column::new("name", "Name"),
                Column::new("email", "Email"),
                Column::new("role", "Role"),
            ]; COLS},
            schema: catalog::user_schema,
            exportable: false,
        },
        PageKind::Fees => PageDescriptor {
            kind,
            title: "Fees",
            icon: "🧾",
            collection: "fees",
            refs: &["residents"],
            search_key: "resident.fullName",
            search_placeholder: "Search by resident...",
            fk_params: &["residentId"],
            columns: {const COLS: &[Column] = &[
                Column::new("resident.fullName", "Resident"),
                Column::new("month", "Month"),
                Column::new("year", "Year"),
                Column::new("amount", "Amount"),
                Column::new("status", "Status"),
            ]; COLS},
            schema: catalog::fee_schema,
            exportable: false,
        },
        PageKind::Payments => PageDescriptor {
            kind,
            title: "Payment History",
            icon: "💳",
            collection: "payments",
            refs: &["residents", "fees"],
            search_key: "resident.fullName",
            search_placeholder: "Search by resident...",
            fk_params: &["residentId"],
            columns: {const COLS: &[Column] = &[
                Column::new("resident.fullName", "Resident"),
                Column::new("fee.month", "Fee Month"),
                Column::new("fee.year", "Fee Year"),
                Column::new("amount", "Amount"),
                Column::new("method", "Method"),
                Column::new("paidAt", "Date"),
            ]; COLS},
            schema: catalog::payment_schema,
            exportable: true,
        },
        PageKind::Complaints => PageDescriptor {
            kind,
            title: "Complaints",
            icon: "📣",
            collection: "complaints",
            refs: &["residents"],
            search_key: "title",
            search_placeholder: "Search complaint...",
            fk_params: &["residentId"],
            columns: {const COLS: &[Column] = &[
                Column::new("resident.fullName", "Resident"),
                Column::new("title", "Title"),
                Column::new("status", "Status"),
            ]; COLS},
            schema: catalog::complaint_schema,
            exportable: false,
        },
        PageKind::Leaves => PageDescriptor {
            kind,
            title: "Leaves",
            icon: "🧳",
            collection: "leaves",
            refs: &["residents"],
            search_key: "resident.fullName",
            search_placeholder: "Search by resident...",
            fk_params: &["residentId"],
            columns: {const COLS: &[Column] = &[
                Column::new("resident.fullName", "Resident"),
                Column::new("fromDate", "From"),
                Column::new("toDate", "To"),
                Column::new("reason", "Reason"),
                Column::new("status", "Status"),
            ]; COLS},
            schema: catalog::leave_schema,
            exportable: false,
        },
        PageKind::Visitors => PageDescriptor {
            kind,
            title: "Visitors",
            icon: "🚶",
            collection: "visitors",
            refs: &["residents"],
            search_key: "name",
            search_placeholder: "Search visitor...",
            fk_params: &["residentId"],
            columns: {const COLS: &[Column] = &[
                Column::new("resident.fullName", "Resident"),
                Column::new("name", "Visitor"),
                Column::new("relation", "Relation"),
                Column::new("inTime", "In"),
                Column::new("outTime", "Out"),
            ]; COLS},
            schema: catalog::visitor_schema,
            exportable: false,
        },
        PageKind::EmergencyContacts => PageDescriptor {
            kind,
            title: "Emergency Contacts",
            icon: "📞",
            collection: "emergency",
            refs: &["residents"],
            search_key: "name",
            search_placeholder: "Search contact...",
            fk_params: &["residentId"],
            columns: {const COLS: &[Column] = &[
                Column::new("resident.fullName", "Resident"),
                Column::new("name", "Contact"),
                Column::new("phone", "Phone"),
                Column::new("relation", "Relation"),
            ]; COLS},
            schema: catalog::emergency_contact_schema,
            exportable: false,
        },
        PageKind::Facilities => PageDescriptor {
            kind,
            title: "Facilities",
            icon: "🏊",
            collection: "facilities",
            refs: &["hostels"],
            search_key: "name",
            search_placeholder: "Search facility...",
            fk_params: &["hostelId"],
            columns: {const COLS: &[Column] = &[
                Column::new("hostel.name", "Hostel"),
                Column::new("name", "Facility"),
                Column::new("startTime", "Opens"),
                Column::new("endTime", "Closes"),
                Column::new("isActive", "Active"),
            ]; COLS},
            schema: catalog::facility_schema,
            exportable: false,
        },
        PageKind::FoodMenus => PageDescriptor {
            kind,
            title: "Food Menus",
            icon: "🍽️",
            collection: "food-menus",
            refs: &["hostels"],
            search_key: "items",
            search_placeholder: "Search menu items...",
            fk_params: &["hostelId"],
            columns: {const COLS: &[Column] = &[
                Column::new("hostel.name", "Hostel"),
                Column::new("dayType", "Day"),
                Column::new("mealType", "Meal"),
                Column::new("items", "Items"),
                Column::new("startTime", "From"),
                Column::new("endTime", "To"),
            ]; COLS},
            schema: catalog::food_menu_schema,
            exportable: false,
        },
        PageKind::HostelTimings => PageDescriptor {
            kind,
            title: "Hostel Timings",
            icon: "⏰",
            collection: "hostel-timings",
            refs: &["hostels"],
            search_key: "dayType",
            search_placeholder: "Search day...",
            fk_params: &["hostelId"],
            columns: {const COLS: &[Column] = &[
                Column::new("hostel.name", "Hostel"),
                Column::new("dayType", "Day"),
                Column::new("inTime", "In Time"),
                Column::new("outTime", "Out Time"),
            ]; COLS},
            schema: catalog::hostel_timing_schema,
            exportable: false,
        },
    }
}

// ============================================================================
// Tests
// ============================================================================
