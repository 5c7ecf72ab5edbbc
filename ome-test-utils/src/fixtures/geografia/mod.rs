use crate::TestContext;

pub mod data;

impl TestContext {
    pub fn geografia<'a>(&'a self) -> GeografiaFixtures<'a> {
        GeografiaFixtures { setup: self }
    }
}

pub struct GeografiaFixtures<'a> {
    pub setup: &'a TestContext,
}
