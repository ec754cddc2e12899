use kernel::id::{Id, markers};

pub type UserId = Id<markers::User>;
