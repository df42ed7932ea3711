pub mod pagination;
pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn envelope_serializes_under_data_key() {
        let body = serde_json::to_value(types::Envelope { data: 42 }).unwrap();
        assert_eq!(body["data"], 42);
    }
}
