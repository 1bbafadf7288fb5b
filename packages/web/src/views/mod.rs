mod nav_layout;
pub use nav_layout::NavLayout;

mod patients;
pub use patients::{AddPatients, PatientDetail, Patients};

mod students;
pub use students::{StudentDetail, Students};

mod error_page;
pub use error_page::{ErrorPage, NotFound};
