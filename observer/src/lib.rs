/*!
The observer design pattern, single-threaded and synchronous.

A [`Subject`] keeps an ordered list of non-owning references to [`Observer`]s and
broadcasts each notification to every one of them, in registration order.

# Design requirements:
- The observer capability is one dyn-safe trait with a single required method
- The subject never owns its observers - the caller does
- Identity is by reference (allocation address), so the same observer may be registered twice
- A broadcast works on a snapshot, so observers may (de)register during `receive`

# Basic usage

```rust
use dp_observer::*;
use std::rc::Rc;

let o1: Rc<dyn Observer> = Rc::new(ConsoleObserver::stdout("observer1"));
let o2: Rc<dyn Observer> = Rc::new(ConsoleObserver::stdout("observer2"));

let subject = Subject::new();
subject.register(&o1);
subject.register(&o2);
subject.notify("my notification.");
// Should print:
// observer1: got: my notification.
// observer2: got: my notification.
```

# Collecting failures

```rust
use dp_observer::*;
use std::rc::Rc;

let (tx, rx) = std::sync::mpsc::channel::<String>();
let channel: Rc<dyn Observer> = Rc::new(tx);

let subject = Subject::new();
subject.register(&channel);
drop(rx);

// the channel observer can no longer deliver
let err = subject.try_notify("hello").unwrap_err();
assert_eq!(err.failures().len(), 1);
```

*/

mod error;
mod observer;
mod subject;

pub use error::*;
pub use observer::*;
pub use subject::*;
