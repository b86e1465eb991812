//! Shared fixtures for unit tests.
//!
//! The keys were generated by an independent RSA implementation and are also
//! used by the JSON vectors under `tests/vectors`.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// 2048-bit recipient "A", SubjectPublicKeyInfo DER, standard base64.
pub(crate) const PUBLIC_KEY_A: &str = "MIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEAvqG4PY0jbPyInOUmBX9qj2d7iDB6pz1VzC39KRUCqLu9xrcrPjCd+Ajndh4YNp6zx01gx6vHYAJuDSMFtPG4ShW+uRlWJMfAnjfUlm0IDxxef0DvIiVNqTexR+ysOmDJFarHWGsp0mtPUCpxudH0Tf24TODH2gbRrD8WKqRYnBmioLAH34zAbkObQleH8lMNOI/dFB/R13J4xg+Sh9f6xFEbks71Y9y4Deo7NxZIWnqJGUYrxF6PrM+Eu648I9lHhLEZPQXjq+ATsSH+z2QJuwOk76k4J3B1hl238ZfjnCrZEyz/ZE4duFcJ58t80war0pM6LRKr7yDfKfI+Or/sDQIDAQAB";

/// 2048-bit recipient "A", PKCS#1 RSAPrivateKey DER, standard base64.
pub(crate) const PRIVATE_KEY_A: &str = "MIIEpQIBAAKCAQEAvqG4PY0jbPyInOUmBX9qj2d7iDB6pz1VzC39KRUCqLu9xrcrPjCd+Ajndh4YNp6zx01gx6vHYAJuDSMFtPG4ShW+uRlWJMfAnjfUlm0IDxxef0DvIiVNqTexR+ysOmDJFarHWGsp0mtPUCpxudH0Tf24TODH2gbRrD8WKqRYnBmioLAH34zAbkObQleH8lMNOI/dFB/R13J4xg+Sh9f6xFEbks71Y9y4Deo7NxZIWnqJGUYrxF6PrM+Eu648I9lHhLEZPQXjq+ATsSH+z2QJuwOk76k4J3B1hl238ZfjnCrZEyz/ZE4duFcJ58t80war0pM6LRKr7yDfKfI+Or/sDQIDAQABAoIBAEOIBb0kUR7sTTcLhE8hRq4bkir6RZEWTN0ik5LoowMEUyPgwpxq26NBAEIbQiejS/u4ISdK5rvP0I2t0Pk7QjZYgrKO07H+43EJRTGu2VKFEcLRzYUSovLlzFM2+AJMRB/9WlYrzGqC4lt7VcNmqb2xOoddf97wWHnE9YTQqKVPYOQEJ9X7tXwol18qBoQmrmrlYzT3hUIe16a45rNKRQgXMnz+5jAbc9QbgUu6nyaKQcmZc3rsJpKgVAMviQ613h4dAWYRBsfXUar+00BLB37xK5oQ3pmQNx5qxDQuHxBt4Dw2uGli4cPr2fMLTEerWpQF8NwtcrvoQISpTWu6zz8CgYEA5hNWF7QSlBzaNmuilyGtkyUaFUrbQNHxTouD+golLIwsgxoAHg9uJT/RQTlcvvXNjJ9L710teUpygnr2D7syh7YcPL3e6YaALJ4gUnM226X6eeDVuiJjZp5w1Gu+n1uurrudQayQuuTA6LGyT3ZGvN8EayoLv2ngAP6zbnjlszcCgYEA1ByaeSQnsbbZtf9aJTTG8o1fbaO2z5+quhTfSIBsIHJOUzYhkQSzxwEog54Xc7Do0CxKy7OBdIVoNdinrMijm8nk0LsACzM9UUYcDULI2G1zeycfqC5K7TwSJubXSN2xR2bZtNcRma+r4C1mr3XiLIUezSLQPmfsNMSBsVcDRNsCgYEAp/uyPjhB4FZ4lIdd/Q6f1vGd67HuB5PBpeGDiMpjffUSgt42+7u0ZgoEVKT3LI33eBbOsIPNseNDXDU+9xlsuV2jnE3dNY/4gZsqakio4xJ6oQYhxndZMBG6u723Pk8IaZeeJ9dBDNP8bWlgkVgAKeKDLWNTlHxPCyrsA1rOC10CgYEApc6OOjA3D0aePRSVRQxSkHxOoogdeYOYk8mJGUW6QEraS1W/O3tvhRq0rt4/+uHJvCFDfqSdh5ZZde4cdIaKzlcuFLR5PkgZoJSrjPotwnEcmqJkrrUxQO16SwqcM4uI7wXJHQIZ8gdO1fjnkjUWTjLpdvXFz2KxVDZgI16fYY0CgYEAzKuOhcVeqZEb9Ba4T1BjUi3pbUzpkVQY4FBKHckjztSIWYZhvxZmjM5IEAjCIRGDoD786FdCCRElHYsNnd2a0rAbcQqCGgDDN40lbQz6YLg/nC1XW/McqZWjkCxukFyMJYHvcHfJpw5SrCIE07UdPS3wpvkMNRvoWcnb0ejoEsE=";

/// 2048-bit recipient "B", SubjectPublicKeyInfo DER, standard base64.
pub(crate) const PUBLIC_KEY_B: &str = "MIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEA54SqRQgKqGFwVnzGd51+bHCXqG/ThY8uP21CZx9d6MVLf8KCA7mAhAZOiVDjsEKGhCOda2zHxVWIynFRLOV9MlqOz0UFBLycG53JUlXjR+C7WYKo7KAbWAmP4b5iVLpH2K1ps2qI640B46nHbTET/W5LyapAhUJY1P4I7QqwlxLmuL3dWVF6NdH2aedIT0f0GGNRL6I2Hv/QXVMFEEWmWPUSNLRuaAPRK4Brjkp8IuIBnPBFtGjzs7M/fi1zdEJJc9GQfVXefY5X37uH8a9luPglvOL6tfrSKe2FJ/Ld6hlZXEbHgBxQOG0sexwcsVClPdUT3mjSXIoR7InB18rFkwIDAQAB";

/// 2048-bit recipient "B", PKCS#1 RSAPrivateKey DER, standard base64.
pub(crate) const PRIVATE_KEY_B: &str = "MIIEpAIBAAKCAQEA54SqRQgKqGFwVnzGd51+bHCXqG/ThY8uP21CZx9d6MVLf8KCA7mAhAZOiVDjsEKGhCOda2zHxVWIynFRLOV9MlqOz0UFBLycG53JUlXjR+C7WYKo7KAbWAmP4b5iVLpH2K1ps2qI640B46nHbTET/W5LyapAhUJY1P4I7QqwlxLmuL3dWVF6NdH2aedIT0f0GGNRL6I2Hv/QXVMFEEWmWPUSNLRuaAPRK4Brjkp8IuIBnPBFtGjzs7M/fi1zdEJJc9GQfVXefY5X37uH8a9luPglvOL6tfrSKe2FJ/Ld6hlZXEbHgBxQOG0sexwcsVClPdUT3mjSXIoR7InB18rFkwIDAQABAoIBAAOFpCV6stbO7KuUKFzHe5XgvJ3mXZxpijWSzvDMrFwPLE/cQKgX2Vmo0ucJ4PzcdjlqZUmuFPfuji8uPCLnttjeQc/rZ+EjkWhmJRrojZWZWKBK+ZDn+qKDOrofcFWDo/Yq5THCjCSxN3ckLRF/LqOrWuHNgj/Eu5854h7hC8CwlIM7mp7KDcVowpQseN63HRpiucZ4CmDTHzQdwjISaIZ+6xPFuecHAoEbCzJ7HF3pOaxcIp9ZDDADUAKyx7kZX9Fx/ZwqsbZw/hyPkRdwYlSOiu5+3vVprIEPl9fZzlCtyiNUJZDJ0rRXyjzhYqUcSSANkJkYvm7irv+wWndXRrECgYEA+P4f4HrNUE0OO2Dei8rTRbheqZgK/4RwMJiaUDBYX883zJcapgwHZiqYR+mmcoiNakbjKCY/4S3roswlYUL+xiajRP4wAP7KQwjs2yYlKREBEDpgqMDJporgLzu/9iiZYRzFHpoT//HvMhDkyS4yUa3Z3Q4CF+wIq6b/Kb0RKhkCgYEA7gilNw4aOv50IofdlnefGEsByfMMVv3Nf5xrFPNJTX7XULx2sElDqeH0ITKOQEoQ6Rh5u9vKL8dicEV4r13qsQ2NB2mAR4GqhOfWNeiwjhFGCzqqAL7Z48sxDSSFiu/yywav59Lugo9JtGa31U+Gg7+QOwJiOiZE1NgRGhvReosCgYEAtJY7MGhgeJkqdU5wmhrk2HA71+z6LRA0/knvwbEOp452/d+p6DxZMXQ7Ngz0N6VqS2ZWYkw7kGnpuQ0vHzej6LslN2jUECS7NZtHjjpAQWSfzNFKQZpxpmSa7Cb9tt8DPzfKj8NYNg2WWk1+YZsry6m3lWgPhKIgN77K2c7SoCECgYEAob0oHd+sPRe269ur2ljPtp8IySMn6FgucR5kuGiTD2A3h7l3YFN38ZAB5SjH9bEeCnTCCr7OhGaTYbwiw+4p0UJm6HlsW6okpogtSpYgmXftQyYKa9VCkoD3hHmjcAOY0xFpJzlxLS+VokoFcaDGwvDAXQhCnEZykLl77WSnkv8CgYB87QAMwev7OUDCi05EFX5ibcrgFTcvEtO7NXd546OUP9tYOdpvrlkrj90esX6xYC0yhJZryTaou8Eb+oM9XIGFQVFI+MTzGgMAYgiS4useTUK0LfmHlZ950a4YzMtti9eArfxkv6j47N+nk7Lq4RbNYBn4R7gIJm3AUTkA4ylg1g==";

/// 1024-bit key, below the accepted minimum.
pub(crate) const PUBLIC_KEY_1024: &str = "MIGfMA0GCSqGSIb3DQEBAQUAA4GNADCBiQKBgQCxWqpbIfVrKK9dl03y7fpj/USW2scQNzECcQvOTLTTCluUIMgQUNsBCXELNYda9DzJPB01HOKz+JVPnM+WjUmyGKog1pyG5pqUhCDxqC+pd2Zl+BySteEe7tyc6avQZ1tTGWkLP27+l2DU556g3B6/E0V+Paj8ayVPeu5tCCCnuQIDAQAB";

/// P-256 SubjectPublicKeyInfo: well-formed, wrong algorithm family.
pub(crate) const PUBLIC_KEY_EC: &str = "MFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAEilH/a53W8HjXkCUZWkUSHsCQLo1CqIcpoKZZZxmq/s45m9S2ZgIyz/lgjtzxMJdXeQx5a6Cd+u5ZcmFZ3wTqvg==";

/// Recipient "A" private key wrapped in PKCS#8 instead of PKCS#1.
pub(crate) const PRIVATE_KEY_A_PKCS8: &str = "MIIEvwIBADANBgkqhkiG9w0BAQEFAASCBKkwggSlAgEAAoIBAQC+obg9jSNs/Iic5SYFf2qPZ3uIMHqnPVXMLf0pFQKou73Gtys+MJ34COd2Hhg2nrPHTWDHq8dgAm4NIwW08bhKFb65GVYkx8CeN9SWbQgPHF5/QO8iJU2pN7FH7Kw6YMkVqsdYaynSa09QKnG50fRN/bhM4MfaBtGsPxYqpFicGaKgsAffjMBuQ5tCV4fyUw04j90UH9HXcnjGD5KH1/rEURuSzvVj3LgN6js3FkhaeokZRivEXo+sz4S7rjwj2UeEsRk9BeOr4BOxIf7PZAm7A6TvqTgncHWGXbfxl+OcKtkTLP9kTh24Vwnny3zTBqvSkzotEqvvIN8p8j46v+wNAgMBAAECggEAQ4gFvSRRHuxNNwuETyFGrhuSKvpFkRZM3SKTkuijAwRTI+DCnGrbo0EAQhtCJ6NL+7ghJ0rmu8/Qja3Q+TtCNliCso7Tsf7jcQlFMa7ZUoURwtHNhRKi8uXMUzb4AkxEH/1aVivMaoLiW3tVw2apvbE6h11/3vBYecT1hNCopU9g5AQn1fu1fCiXXyoGhCauauVjNPeFQh7Xprjms0pFCBcyfP7mMBtz1BuBS7qfJopByZlzeuwmkqBUAy+JDrXeHh0BZhEGx9dRqv7TQEsHfvErmhDemZA3HmrENC4fEG3gPDa4aWLhw+vZ8wtMR6talAXw3C1yu+hAhKlNa7rPPwKBgQDmE1YXtBKUHNo2a6KXIa2TJRoVSttA0fFOi4P6CiUsjCyDGgAeD24lP9FBOVy+9c2Mn0vvXS15SnKCevYPuzKHthw8vd7phoAsniBSczbbpfp54NW6ImNmnnDUa76fW66uu51BrJC65MDosbJPdka83wRrKgu/aeAA/rNueOWzNwKBgQDUHJp5JCexttm1/1olNMbyjV9to7bPn6q6FN9IgGwgck5TNiGRBLPHASiDnhdzsOjQLErLs4F0hWg12KesyKObyeTQuwALMz1RRhwNQsjYbXN7Jx+oLkrtPBIm5tdI3bFHZtm01xGZr6vgLWavdeIshR7NItA+Z+w0xIGxVwNE2wKBgQCn+7I+OEHgVniUh139Dp/W8Z3rse4Hk8Gl4YOIymN99RKC3jb7u7RmCgRUpPcsjfd4Fs6wg82x40NcNT73GWy5XaOcTd01j/iBmypqSKjjEnqhBiHGd1kwEbq7vbc+Twhpl54n10EM0/xtaWCRWAAp4oMtY1OUfE8LKuwDWs4LXQKBgQClzo46MDcPRp49FJVFDFKQfE6iiB15g5iTyYkZRbpAStpLVb87e2+FGrSu3j/64cm8IUN+pJ2Hlll17hx0horOVy4UtHk+SBmglKuM+i3CcRyaomSutTFA7XpLCpwzi4jvBckdAhnyB07V+OeSNRZOMul29cXPYrFUNmAjXp9hjQKBgQDMq46FxV6pkRv0FrhPUGNSLeltTOmRVBjgUEodySPO1IhZhmG/FmaMzkgQCMIhEYOgPvzoV0IJESUdiw2d3ZrSsBtxCoIaAMM3jSVtDPpguD+cLVdb8xyplaOQLG6QXIwlge9wd8mnDlKsIgTTtR09LfCm+Qw1G+hZydvR6OgSwQ==";

/// Deterministic generator for reproducible tests.
pub(crate) fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A generator whose fallible interface always fails.
pub(crate) struct FailingRng;

impl rand_core::RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand_core::Error> {
        Err(rand_core::Error::new("entropy source unavailable"))
    }
}

impl rand_core::CryptoRng for FailingRng {}
