use std::sync::Arc;

use selvam_core::enquiry::EnquiryService;
use selvam_core::quotation::QuotationService;

#[derive(Clone)]
pub struct AppState {
    pub enquiries: Arc<EnquiryService>,
    pub quotations: Arc<QuotationService>,
    pub body_limit_bytes: usize,
}
