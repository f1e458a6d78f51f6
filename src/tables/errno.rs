// SPDX-License-Identifier: GPL-2.0-or-later

//! System call error numbers.
//!
//! Codes reference the `libc` constants rather than hard-coded integers, so
//! the table carries whatever values the target platform defines. Order
//! follows the Linux `errno.h` declaration order, with alias names placed
//! directly after their canonical entry.

use crate::types::Entry;

const fn e(name: &'static str, code: libc::c_int) -> Entry {
    Entry::new(name, code)
}

pub const ERRNO: &[Entry] = &[
    e("EPERM", libc::EPERM),
    e("ENOENT", libc::ENOENT),
    e("ESRCH", libc::ESRCH),
    e("EINTR", libc::EINTR),
    e("EIO", libc::EIO),
    e("ENXIO", libc::ENXIO),
    e("E2BIG", libc::E2BIG),
    e("ENOEXEC", libc::ENOEXEC),
    e("EBADF", libc::EBADF),
    e("ECHILD", libc::ECHILD),
    e("EAGAIN", libc::EAGAIN),
    e("EWOULDBLOCK", libc::EWOULDBLOCK),
    e("ENOMEM", libc::ENOMEM),
    e("EACCES", libc::EACCES),
    e("EFAULT", libc::EFAULT),
    e("ENOTBLK", libc::ENOTBLK),
    e("EBUSY", libc::EBUSY),
    e("EEXIST", libc::EEXIST),
    e("EXDEV", libc::EXDEV),
    e("ENODEV", libc::ENODEV),
    e("ENOTDIR", libc::ENOTDIR),
    e("EISDIR", libc::EISDIR),
    e("EINVAL", libc::EINVAL),
    e("ENFILE", libc::ENFILE),
    e("EMFILE", libc::EMFILE),
    e("ENOTTY", libc::ENOTTY),
    e("ETXTBSY", libc::ETXTBSY),
    e("EFBIG", libc::EFBIG),
    e("ENOSPC", libc::ENOSPC),
    e("ESPIPE", libc::ESPIPE),
    e("EROFS", libc::EROFS),
    e("EMLINK", libc::EMLINK),
    e("EPIPE", libc::EPIPE),
    e("EDOM", libc::EDOM),
    e("ERANGE", libc::ERANGE),
    e("EDEADLK", libc::EDEADLK),
    e("EDEADLOCK", libc::EDEADLOCK),
    e("ENAMETOOLONG", libc::ENAMETOOLONG),
    e("ENOLCK", libc::ENOLCK),
    e("ENOSYS", libc::ENOSYS),
    e("ENOTEMPTY", libc::ENOTEMPTY),
    e("ELOOP", libc::ELOOP),
    e("ENOMSG", libc::ENOMSG),
    e("EIDRM", libc::EIDRM),
    e("ECHRNG", libc::ECHRNG),
    e("EL2NSYNC", libc::EL2NSYNC),
    e("EL3HLT", libc::EL3HLT),
    e("EL3RST", libc::EL3RST),
    e("ELNRNG", libc::ELNRNG),
    e("EUNATCH", libc::EUNATCH),
    e("ENOCSI", libc::ENOCSI),
    e("EL2HLT", libc::EL2HLT),
    e("EBADE", libc::EBADE),
    e("EBADR", libc::EBADR),
    e("EXFULL", libc::EXFULL),
    e("ENOANO", libc::ENOANO),
    e("EBADRQC", libc::EBADRQC),
    e("EBADSLT", libc::EBADSLT),
    e("EBFONT", libc::EBFONT),
    e("ENOSTR", libc::ENOSTR),
    e("ENODATA", libc::ENODATA),
    e("ETIME", libc::ETIME),
    e("ENOSR", libc::ENOSR),
    e("ENONET", libc::ENONET),
    e("ENOPKG", libc::ENOPKG),
    e("EREMOTE", libc::EREMOTE),
    e("ENOLINK", libc::ENOLINK),
    e("EADV", libc::EADV),
    e("ESRMNT", libc::ESRMNT),
    e("ECOMM", libc::ECOMM),
    e("EPROTO", libc::EPROTO),
    e("EMULTIHOP", libc::EMULTIHOP),
    e("EDOTDOT", libc::EDOTDOT),
    e("EBADMSG", libc::EBADMSG),
    e("EOVERFLOW", libc::EOVERFLOW),
    e("ENOTUNIQ", libc::ENOTUNIQ),
    e("EBADFD", libc::EBADFD),
    e("EREMCHG", libc::EREMCHG),
    e("ELIBACC", libc::ELIBACC),
    e("ELIBBAD", libc::ELIBBAD),
    e("ELIBSCN", libc::ELIBSCN),
    e("ELIBMAX", libc::ELIBMAX),
    e("ELIBEXEC", libc::ELIBEXEC),
    e("EILSEQ", libc::EILSEQ),
    e("ERESTART", libc::ERESTART),
    e("ESTRPIPE", libc::ESTRPIPE),
    e("EUSERS", libc::EUSERS),
    e("ENOTSOCK", libc::ENOTSOCK),
    e("EDESTADDRREQ", libc::EDESTADDRREQ),
    e("EMSGSIZE", libc::EMSGSIZE),
    e("EPROTOTYPE", libc::EPROTOTYPE),
    e("ENOPROTOOPT", libc::ENOPROTOOPT),
    e("EPROTONOSUPPORT", libc::EPROTONOSUPPORT),
    e("ESOCKTNOSUPPORT", libc::ESOCKTNOSUPPORT),
    e("EOPNOTSUPP", libc::EOPNOTSUPP),
    e("ENOTSUP", libc::ENOTSUP),
    e("EPFNOSUPPORT", libc::EPFNOSUPPORT),
    e("EAFNOSUPPORT", libc::EAFNOSUPPORT),
    e("EADDRINUSE", libc::EADDRINUSE),
    e("EADDRNOTAVAIL", libc::EADDRNOTAVAIL),
    e("ENETDOWN", libc::ENETDOWN),
    e("ENETUNREACH", libc::ENETUNREACH),
    e("ENETRESET", libc::ENETRESET),
    e("ECONNABORTED", libc::ECONNABORTED),
    e("ECONNRESET", libc::ECONNRESET),
    e("ENOBUFS", libc::ENOBUFS),
    e("EISCONN", libc::EISCONN),
    e("ENOTCONN", libc::ENOTCONN),
    e("ESHUTDOWN", libc::ESHUTDOWN),
    e("ETOOMANYREFS", libc::ETOOMANYREFS),
    e("ETIMEDOUT", libc::ETIMEDOUT),
    e("ECONNREFUSED", libc::ECONNREFUSED),
    e("EHOSTDOWN", libc::EHOSTDOWN),
    e("EHOSTUNREACH", libc::EHOSTUNREACH),
    e("EALREADY", libc::EALREADY),
    e("EINPROGRESS", libc::EINPROGRESS),
    e("ESTALE", libc::ESTALE),
    e("EUCLEAN", libc::EUCLEAN),
    e("ENOTNAM", libc::ENOTNAM),
    e("ENAVAIL", libc::ENAVAIL),
    e("EISNAM", libc::EISNAM),
    e("EREMOTEIO", libc::EREMOTEIO),
    e("EDQUOT", libc::EDQUOT),
    e("ENOMEDIUM", libc::ENOMEDIUM),
    e("EMEDIUMTYPE", libc::EMEDIUMTYPE),
    e("ECANCELED", libc::ECANCELED),
    e("ENOKEY", libc::ENOKEY),
    e("EKEYEXPIRED", libc::EKEYEXPIRED),
    e("EKEYREVOKED", libc::EKEYREVOKED),
    e("EKEYREJECTED", libc::EKEYREJECTED),
    e("EOWNERDEAD", libc::EOWNERDEAD),
    e("ENOTRECOVERABLE", libc::ENOTRECOVERABLE),
    e("ERFKILL", libc::ERFKILL),
    e("EHWPOISON", libc::EHWPOISON),
];
