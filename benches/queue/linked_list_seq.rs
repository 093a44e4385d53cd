// Copyright (c) 2020 kprotty
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// 	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{collections::LinkedList, mem};

pub struct Seq(LinkedList<String>);

impl super::Sequence for Seq {
    const NAME: &'static str = "LinkedList<String>";

    fn new() -> Self {
        Self(LinkedList::new())
    }

    fn push_back(&mut self, value: &str) {
        self.0.push_back(value.to_owned());
    }

    fn push_front(&mut self, value: &str) {
        self.0.push_front(value.to_owned());
    }

    fn pop_front(&mut self) -> Option<String> {
        self.0.pop_front()
    }

    fn reverse(&mut self) {
        self.0 = mem::take(&mut self.0).into_iter().rev().collect();
    }

    // std's LinkedList has no sort, so this goes through a Vec.
    fn sort(&mut self) {
        let mut values: Vec<String> = mem::take(&mut self.0).into_iter().collect();
        values.sort();
        self.0 = values.into_iter().collect();
    }
}
