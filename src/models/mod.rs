pub mod ip_record;

pub use ip_record::IpRecord;
