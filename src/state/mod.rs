mod session;

pub use session::RecipeSession;
