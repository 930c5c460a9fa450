//! Lets library code paint into and fill component state directly.

use dioxus::prelude::*;

use crate::{
    form::{FieldTarget, FormValues},
    list::{Block, Container, ListContainer},
};

impl Container for Signal<ListContainer> {
    fn rebuild(&mut self, blocks: Vec<Block>) {
        self.write().rebuild(blocks);
    }
}

impl FieldTarget for Signal<FormValues> {
    fn set_field(&mut self, input: &str, value: String) {
        self.write().set(input, value);
    }
}
