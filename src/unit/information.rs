//! Digital information. These families carry no physical dimension and are
//! not part of any mechanical unit system.

unit_family! {
    /// Units of memory, in decimal and binary prefixes.
    Memory {
        dimensions: [0, 0, 0, 0, 0, 0, 0],
        standard: Bit,
        systems: {},
        units: {
            Bit: "b" = scale(1.0) ["bit", "bits"],
            Byte: "B" = scale(8.0) ["byte", "bytes", "octet", "octets"],
            Kilobit: "kb" = scale(1.0e3) ["kilobit", "kilobits"],
            Kilobyte: "kB" = scale(8.0e3) ["kilobyte", "kilobytes"],
            Kibibit: "Kib" = scale(1024.0) ["kibibit", "kibibits"],
            Kibibyte: "KiB" = scale(8192.0) ["kibibyte", "kibibytes"],
            Megabit: "Mb" = scale(1.0e6) ["megabit", "megabits"],
            Megabyte: "MB" = scale(8.0e6) ["megabyte", "megabytes"],
            Mebibit: "Mib" = scale(1_048_576.0) ["mebibit", "mebibits"],
            Mebibyte: "MiB" = scale(8_388_608.0) ["mebibyte", "mebibytes"],
            Gigabit: "Gb" = scale(1.0e9) ["gigabit", "gigabits"],
            Gigabyte: "GB" = scale(8.0e9) ["gigabyte", "gigabytes"],
            Gibibit: "Gib" = scale(1_073_741_824.0) ["gibibit", "gibibits"],
            Gibibyte: "GiB" = scale(8_589_934_592.0) ["gibibyte", "gibibytes"],
            Terabit: "Tb" = scale(1.0e12) ["terabit", "terabits"],
            Terabyte: "TB" = scale(8.0e12) ["terabyte", "terabytes"],
            Tebibit: "Tib" = scale(1_099_511_627_776.0) ["tebibit", "tebibits"],
            Tebibyte: "TiB" = scale(8_796_093_022_208.0) ["tebibyte", "tebibytes"],
        }
    }
}

unit_family! {
    /// Units of data transfer rate.
    MemoryRate {
        dimensions: [-1, 0, 0, 0, 0, 0, 0],
        standard: BitPerSecond,
        systems: {},
        units: {
            BitPerSecond: "b/s" = scale(1.0) ["bps", "bit/s"],
            BytePerSecond: "B/s" = scale(8.0) ["Bps", "byte/s"],
            KilobitPerSecond: "kb/s" = scale(1.0e3) ["kbps", "kbit/s"],
            KilobytePerSecond: "kB/s" = scale(8.0e3) ["kBps"],
            KibibytePerSecond: "KiB/s" = scale(8192.0) [],
            MegabitPerSecond: "Mb/s" = scale(1.0e6) ["Mbps", "Mbit/s"],
            MegabytePerSecond: "MB/s" = scale(8.0e6) ["MBps"],
            MebibytePerSecond: "MiB/s" = scale(8_388_608.0) [],
            GigabitPerSecond: "Gb/s" = scale(1.0e9) ["Gbps", "Gbit/s"],
            GigabytePerSecond: "GB/s" = scale(8.0e9) ["GBps"],
            GibibytePerSecond: "GiB/s" = scale(8_589_934_592.0) [],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::Unit;

    #[test]
    fn test_binary_prefixes() {
        assert_eq!(
            Memory::convert_copy(1.0, Memory::Mebibyte, Memory::Kibibyte),
            1024.0
        );
        assert_eq!(Memory::convert_copy(1.0, Memory::Byte, Memory::Bit), 8.0);
        assert_eq!(
            MemoryRate::convert_copy(1.0, MemoryRate::MegabytePerSecond, MemoryRate::MegabitPerSecond),
            8.0
        );
    }

    #[test]
    fn test_case_distinguishes_bits_from_bytes() {
        assert_eq!(Memory::parse("kB"), Some(Memory::Kilobyte));
        assert_eq!(Memory::parse("kb"), Some(Memory::Kilobit));
        assert_eq!(Memory::parse("KB"), None);
        assert_eq!(Memory::parse("BYTES"), Some(Memory::Byte));
        assert_eq!(MemoryRate::parse("mbps"), None);
    }
}
