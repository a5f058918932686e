use crate::TestContext;

pub mod factory;
pub mod mockito;

impl TestContext {
    pub fn content<'a>(&'a mut self) -> ContentFixtures<'a> {
        ContentFixtures { setup: self }
    }
}

pub struct ContentFixtures<'a> {
    pub setup: &'a mut TestContext,
}
