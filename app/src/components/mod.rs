mod hello;

pub use self::hello::Hello;
