pub mod scan;

pub use scan::scan_projects;
