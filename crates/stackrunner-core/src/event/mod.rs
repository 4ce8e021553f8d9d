// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Provides the broadcast primitive used for host and engine signals.
//!
//! The [`EventHub`] fans every published event out to all live subscribers.
//! Subscribing returns a [`Subscription`], which doubles as the disposer:
//! dropping it (or calling [`Subscription::dispose`]) unregisters the listener,
//! so a shell can be torn down deterministically.

mod hub;

pub use self::hub::{EventHub, Subscription};
