use std::cmp::Ordering;
use std::env;
use std::process::Command;

// Vector ISAs this crate can target natively. Exactly one cfg flag is
// emitted per build; every emulated function keys its implementation
// path off that flag.
#[derive(PartialEq, Eq, Debug)]
struct VectorIsa {
    name: &'static str,
    // cpuinfo/sysctl tokens that indicate the ISA is present
    detect_tokens: &'static [&'static str],
    rustc_flag: &'static str,
    cfg_flag: &'static str,
    // target triple prefixes the ISA makes sense for
    arch_prefixes: &'static [&'static str],
    detected: bool,
}

impl VectorIsa {
    // Priority order between ISAs (lowest number == highest priority).
    // Only one can win since they live on disjoint architectures, but
    // the ordering keeps selection deterministic.
    fn priority(&self) -> usize {
        match self.name {
            "sse2" => 0,
            "neon" => 1,
            _ => usize::MAX,
        }
    }

    fn all() -> Vec<VectorIsa> {
        vec![
            VectorIsa {
                name: "sse2",
                detect_tokens: &["sse2"],
                rustc_flag: "+sse2",
                cfg_flag: "sse",
                arch_prefixes: &["x86_64", "i686", "i586"],
                detected: false,
            },
            VectorIsa {
                name: "neon",
                // aarch64 Linux reports AdvSIMD as "asimd"
                detect_tokens: &["neon", "asimd"],
                rustc_flag: "+neon",
                cfg_flag: "neon",
                arch_prefixes: &["aarch64", "arm64"],
                detected: false,
            },
        ]
    }

    fn matches_target(&self, target: &str) -> bool {
        self.arch_prefixes.iter().any(|p| target.starts_with(p))
    }
}

impl Ord for VectorIsa {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for VectorIsa {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Feature detection trait to make implementations more modular
trait IsaDetector {
    fn detect(&self, isas: &mut [VectorIsa]);
    fn is_applicable(&self) -> bool;
}

// Linux detector: scan /proc/cpuinfo for the ISA tokens
struct LinuxDetector;
impl IsaDetector for LinuxDetector {
    fn detect(&self, isas: &mut [VectorIsa]) {
        if let Ok(cpuinfo) = std::fs::read_to_string("/proc/cpuinfo") {
            let contents = cpuinfo.to_lowercase();
            for isa in isas.iter_mut() {
                isa.detected = isa.detect_tokens.iter().any(|t| contents.contains(t));
            }
        }
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "linux")
    }
}

// macOS detector: query sysctl
struct MacOSDetector;
impl IsaDetector for MacOSDetector {
    fn detect(&self, isas: &mut [VectorIsa]) {
        let output = Command::new("sysctl").args(["-a"]).output();

        if let Ok(output) = output {
            let contents = String::from_utf8_lossy(&output.stdout).to_lowercase();

            for isa in isas.iter_mut() {
                isa.detected = match isa.name {
                    "sse2" => contents.contains("hw.optional.sse2: 1"),
                    "neon" => contents.contains("hw.optional.neon: 1"),
                    _ => false,
                };
            }
        }
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "macos")
    }
}

struct PlatformDetector;
impl PlatformDetector {
    fn detectors() -> Vec<Box<dyn IsaDetector>> {
        vec![Box::new(LinuxDetector), Box::new(MacOSDetector)]
    }

    fn detect(isas: &mut [VectorIsa]) {
        for detector in Self::detectors() {
            if detector.is_applicable() {
                detector.detect(isas);
                break;
            }
        }
    }

    fn apply(isas: &mut [VectorIsa], target: &str) {
        isas.sort();

        // Highest-priority detected ISA that fits the target wins; if
        // nothing is detected the portable lane loops carry the build.
        let cfg_flag = isas
            .iter()
            .find(|isa| isa.detected && isa.matches_target(target))
            .map(|isa| {
                println!("cargo:rustc-flag=-C");
                println!("cargo:rustc-flag=target-feature={}", isa.rustc_flag);
                isa.cfg_flag
            })
            .unwrap_or("fallback");

        println!("cargo:rustc-cfg={cfg_flag}");

        println!("cargo::rustc-check-cfg=cfg(sse)");
        println!("cargo::rustc-check-cfg=cfg(neon)");
        println!("cargo::rustc-check-cfg=cfg(fallback)");
    }
}

fn main() {
    let mut isas = VectorIsa::all();

    // Determine if we're cross-compiling
    let host = env::var("HOST").unwrap_or_default();
    let target = env::var("TARGET").unwrap_or_default();

    let is_native_build = host == target;

    // Only run CPU detection for native builds; cross builds take the
    // scalar fallback so the result never depends on the build machine.
    if is_native_build {
        PlatformDetector::detect(&mut isas);
    }

    PlatformDetector::apply(&mut isas, &target);
}
