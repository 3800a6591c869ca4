//! Static exim log corpora used across harnesses.

/// The worked example: one arrival with every tagged field present.
pub const ARRIVAL_LINE: &str =
    "2024-01-15 08:30:00 1a2b3c <= alice@example.com H=mail.example.com (mx1) U=alice A=plain";

/// A realistic slice of an exim4 mainlog covering one relayed message, a
/// local bounce, and the noise around them.
pub const CORPUS_MAINLOG: &[&str] = &[
    "2024-01-15 08:29:58 exim 4.97 daemon started: pid=811, -q30m, listening for SMTP on port 25 (IPv4)",
    "2024-01-15 08:30:00 1rPa7k-000Abc-2x <= alice@example.com H=mail.example.com (mx1) [192.0.2.10] P=esmtps X=TLS1.3:TLS_AES_256_GCM_SHA384:256 CV=no A=plain:alice S=2203 id=20240115083000.GA1@example.com",
    "2024-01-15 08:30:01 1rPa7k-000Abc-2x => bob@example.org R=dnslookup T=remote_smtp H=mx.example.org [198.51.100.7] X=TLS1.3:TLS_AES_256_GCM_SHA384:256 CV=yes C=\"250 2.0.0 Ok: queued\"",
    "2024-01-15 08:30:01 1rPa7k-000Abc-2x Completed",
    "2024-01-15 08:31:12 1rPa9S-000Def-7q <= <> R=1rPa7k-000Abc-2x U=Debian-exim P=local S=1841",
    "2024-01-15 08:31:12 1rPa9S-000Def-7q => alice <alice@localhost> R=local_user T=mail_spool",
    "2024-01-15 08:31:12 1rPa9S-000Def-7q Completed",
    "2024-01-15 08:59:58 Start queue run: pid=4242",
    "2024-01-15 08:59:58 End queue run: pid=4242",
];

/// Lines that carry no marker and must never produce output.
pub const CORPUS_NOISE: &[&str] = &[
    "",
    "2024-01-15 08:29:58 exim 4.97 daemon started: pid=811",
    "2024-01-15 08:59:58 Start queue run: pid=4242",
    "2024-01-15 09:00:04 SMTP connection from [203.0.113.9] lost",
    "2024-01-15 09:00:05 1rPaAb-000Ghi-1z ** nobody@example.net: Unrouteable address",
    "2024-01-15 09:00:05 1rPaAb-000Ghi-1z completed",
];

/// Marker lines cut short before the fields the extractor needs.
pub const CORPUS_TRUNCATED: &[&str] = &[
    "<=",
    "2024-01-15 08:30:00 1a2b3c <=",
    "2024-01-15 08:30:01 =>",
    "Completed",
    "2024-01-15 Completed",
];

/// Generate `n` arrival/delivery/completion triples, one second apart.
pub fn corpus_sessions(n: usize) -> Vec<String> {
    let clock = |s: usize| format!("{:02}:{:02}:{:02}", s / 3600 % 24, s / 60 % 60, s % 60);
    (0..n)
        .flat_map(|i| {
            let id = format!("1rP{i:03}-000Aaa-00");
            [
                format!(
                    "2024-01-15 {} {id} <= user{i}@example.com H=relay{i}.example.com U=user{i}",
                    clock(3 * i)
                ),
                format!("2024-01-15 {} {id} => dest{i}@example.org R=dnslookup", clock(3 * i + 1)),
                format!("2024-01-15 {} {id} Completed", clock(3 * i + 2)),
            ]
        })
        .collect()
}
