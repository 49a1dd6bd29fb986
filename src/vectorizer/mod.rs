mod model;
mod vector;

pub use model::TfidfVectorizer;
pub use vector::SparseVector;
