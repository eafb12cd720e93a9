mod foundation_details;

pub use foundation_details::FoundationDetails;
