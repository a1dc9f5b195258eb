
// Wrap std:: modules in namespace
#[allow(unused_imports)]
mod stdlib {

    pub use std::{
        cmp,
        fmt,
        hash,
        iter,
        num,
        ops,
        slice,
        str,
        string,
        vec,
    };

    #[cfg(test)]
    pub use std::collections::hash_map::DefaultHasher;
}
