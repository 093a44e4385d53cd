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

use strqueue::Queue;

pub struct Seq(Queue);

impl super::Sequence for Seq {
    const NAME: &'static str = "strqueue::Queue";

    fn new() -> Self {
        Self(Queue::new())
    }

    fn push_back(&mut self, value: &str) {
        self.0.insert_tail(value).unwrap();
    }

    fn push_front(&mut self, value: &str) {
        self.0.insert_head(value).unwrap();
    }

    fn pop_front(&mut self) -> Option<String> {
        self.0.pop_head()
    }

    fn reverse(&mut self) {
        self.0.reverse()
    }

    fn sort(&mut self) {
        self.0.sort()
    }
}
