mod landing;
pub use landing::Landing;

mod sections;
pub use sections::PageSection;
