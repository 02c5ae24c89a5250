/// A register word with its two interpretations: unsigned, and signed
/// two's complement over the same 32 bits.
#[derive(Clone, Copy)]
pub union Register {
    i: i32,
    u: u32,
}

impl Register {
    pub fn i(self) -> i32 {
        unsafe { self.i }
    }

    pub fn u(self) -> u32 {
        unsafe { self.u }
    }

    pub fn set_i(&mut self, value: i32) {
        self.i = value;
    }

    pub fn set_u(&mut self, value: u32) {
        self.u = value;
    }
}

impl Default for Register {
    fn default() -> Register {
        Register { u: 0 }
    }
}
