mod patients;
pub use patients::PatientsView;

mod patient_detail;
pub use patient_detail::PatientDetailView;

mod add_patients;
pub use add_patients::AddPatientsView;

mod students;
pub use students::StudentsView;

mod student_detail;
pub use student_detail::StudentDetailView;

mod error_page;
pub use error_page::ErrorView;
