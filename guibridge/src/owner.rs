use std::ffi::c_void;

/// Opaque identity of caller-owned state.
///
/// The bridge copies this around and hands it back to the bound function;
/// it never dereferences it. Keeping the pointee alive for as long as a
/// handler using it stays attached is the caller's job.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwnerHandle(*mut c_void);

impl OwnerHandle {
    pub fn from_ptr(ptr: *mut c_void) -> Self {
        Self(ptr)
    }
    /// Use the address of `owner` as the identity.
    pub fn from_ref<T>(owner: &T) -> Self {
        Self(owner as *const T as *mut c_void)
    }
    /// Use a plain integer token (an index into a caller-side table, say)
    /// as the identity.
    pub fn from_token(token: usize) -> Self {
        Self(token as *mut c_void)
    }
    pub fn as_ptr(self) -> *mut c_void {
        self.0
    }
    pub fn addr(self) -> usize {
        self.0 as usize
    }
    pub fn is_null(self) -> bool {
        self.0.is_null()
    }
}

impl std::fmt::Debug for OwnerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OwnerHandle({:#x})", self.addr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_follows_address() {
        let a = 5_u32;
        let b = 5_u32;
        assert_eq!(OwnerHandle::from_ref(&a), OwnerHandle::from_ref(&a));
        assert_ne!(OwnerHandle::from_ref(&a), OwnerHandle::from_ref(&b));
        assert_eq!(OwnerHandle::from_token(42).addr(), 42);
        assert!(OwnerHandle::from_ptr(std::ptr::null_mut()).is_null());
    }

    #[test]
    fn debug_prints_hex_address() {
        assert_eq!(format!("{:?}", OwnerHandle::from_token(255)), "OwnerHandle(0xff)");
    }
}
