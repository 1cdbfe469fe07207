//! Status helper enums mapping to SMALLINT columns.
//!
//! Each enum variant's discriminant matches the 1-based values documented
//! in the initial migration.

use homecheck_core::error::CoreError;

/// Status ID type matching SMALLINT in the database.
pub type StatusId = i16;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Return the database status ID.
            pub fn id(self) -> StatusId {
                self as StatusId
            }
        }

        impl From<$name> for StatusId {
            fn from(value: $name) -> Self {
                value as StatusId
            }
        }
    };
}

define_status_enum! {
    /// Inspection lifecycle status.
    InspectionStatus {
        Pending = 1,
        Ongoing = 2,
        Completed = 3,
    }
}

impl InspectionStatus {
    /// Parse a lower-case API label.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            "pending" => Ok(Self::Pending),
            "ongoing" => Ok(Self::Ongoing),
            "completed" => Ok(Self::Completed),
            other => Err(CoreError::Validation(format!(
                "Unknown inspection status '{other}'. Must be one of: pending, ongoing, completed"
            ))),
        }
    }

    /// API label for this status.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
        }
    }

    /// Map a raw status_id column value back to a label.
    ///
    /// Unknown values (which only a hand-edited row could produce) render
    /// as `"unknown"` rather than failing the whole listing.
    pub fn label_for_id(id: StatusId) -> &'static str {
        match id {
            x if x == Self::Pending.id() => "pending",
            x if x == Self::Ongoing.id() => "ongoing",
            x if x == Self::Completed.id() => "completed",
            _ => "unknown",
        }
    }
}

define_status_enum! {
    /// Photo attachment saga status. `Pending` rows are markers written
    /// before the object upload; they flip to `Uploaded` once the object
    /// store confirms the write.
    ImageStatus {
        Pending = 1,
        Uploaded = 2,
    }
}
