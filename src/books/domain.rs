use crate::core::domain::Identifiable;
use crate::core::shelf::BookStatus;

pub(crate) trait Book: Identifiable {
    fn status(&self) -> BookStatus;
    fn has_status(&self, status: BookStatus) -> bool {
        self.status() == status
    }
}
