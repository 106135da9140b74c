// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! The byte/character codec underlying every blob embedded in a
//! `.tbc` stream: a non-standard ASCII85 variant that swaps five
//! characters to stay Tcl- and shell-safe, and reverses byte and
//! character order within each chunk.
pub mod alphabet;
pub mod chunk;
mod decoder;
mod encoder;

pub use decoder::decode;
pub use encoder::encode;
