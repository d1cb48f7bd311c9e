//! Diesel schema for complaint persistence.

diesel::table! {
    /// Complaint records with routing and assignment data.
    complaints (id) {
        /// Storage identifier.
        id -> Uuid,
        /// Human-readable order identifier.
        #[max_length = 6]
        order_id -> Varchar,
        /// Complainant name.
        #[max_length = 255]
        name -> Varchar,
        /// Complainant email.
        #[max_length = 255]
        email -> Varchar,
        /// Optional complainant phone number.
        #[max_length = 64]
        phone -> Nullable<Varchar>,
        /// Free-text description.
        description -> Text,
        /// Complaint category label.
        #[max_length = 32]
        complaint_type -> Varchar,
        /// Lifecycle status label.
        #[max_length = 32]
        status -> Varchar,
        /// Owning department.
        #[max_length = 255]
        department -> Nullable<Varchar>,
        /// Worker assignment list.
        assigned_workers -> Jsonb,
        /// Optional free-text address.
        address -> Nullable<Text>,
        /// Optional latitude.
        location_lat -> Nullable<Float8>,
        /// Optional longitude.
        location_lng -> Nullable<Float8>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Worker directory entries.
    workers (worker_id) {
        /// Prefix-coded worker identifier.
        #[max_length = 64]
        worker_id -> Varchar,
        /// Registration timestamp.
        created_at -> Timestamptz,
    }
}
