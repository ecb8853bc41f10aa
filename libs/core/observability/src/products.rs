//! Product catalog metrics.

use metrics::{counter, histogram};

/// Product metrics recorder
pub struct ProductMetrics;

impl ProductMetrics {
    /// Record a list request and the size of the page it returned
    pub fn record_list(returned: usize, total: u64) {
        counter!("product_operations_total", "operation" => "list").increment(1);
        histogram!("product_list_results").record(returned as f64);

        tracing::debug!(returned = returned, total = total, "Listed products");
    }

    pub fn record_created() {
        counter!("product_operations_total", "operation" => "create").increment(1);
    }

    pub fn record_updated() {
        counter!("product_operations_total", "operation" => "update").increment(1);
    }

    pub fn record_deleted() {
        counter!("product_operations_total", "operation" => "delete").increment(1);
    }

    /// Record a stored image and its size in bytes
    pub fn record_image_uploaded(bytes: usize) {
        counter!("product_images_uploaded_total").increment(1);
        histogram!("product_image_bytes").record(bytes as f64);
    }
}
